use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// 上游回應的 TTL 快取；原始實作依賴平台層的一小時 revalidate，
/// 這裡以行程內快取承擔同一職責
pub struct ResponseCache {
    cache: RwLock<HashMap<String, CachedEntry>>,
    ttl: Duration,
    max_entries: usize,
}

struct CachedEntry {
    body: serde_json::Value,
    inserted_at: Instant,
}

impl ResponseCache {
    pub fn new(ttl_secs: u64, max_entries: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl: Duration::from_secs(ttl_secs),
            max_entries,
        }
    }

    /// 取出未過期的快取回應
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(key)?;

        if entry.inserted_at.elapsed() > self.ttl {
            return None; // 已過期
        }

        Some(entry.body.clone())
    }

    pub fn insert(&self, key: &str, body: &serde_json::Value) {
        let mut cache = match self.cache.write() {
            Ok(c) => c,
            Err(_) => return,
        };

        // 滿了先淘汰最舊的一筆
        if cache.len() >= self.max_entries {
            Self::evict_oldest(&mut cache);
        }

        cache.insert(
            key.to_string(),
            CachedEntry {
                body: body.clone(),
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    fn evict_oldest(cache: &mut HashMap<String, CachedEntry>) {
        let oldest = cache
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            cache.remove(&key);
        }
    }
}
