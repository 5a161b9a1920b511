use crate::domain::model::SearchParams;

pub const DEFAULT_LIMIT: &str = "10";
pub const DEFAULT_OFFSET: &str = "0";

/// 將搜尋參數轉成上游查詢字串的鍵值對。
/// 只輸出有值的欄位；limit/offset 缺少時補預設值；api_key 放在最後。
pub fn build_query(params: &SearchParams, api_key: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    push_present(&mut pairs, "naicsCode", &params.naics_code);
    push_present(&mut pairs, "keyword", &params.keyword);
    push_present(&mut pairs, "postedFrom", &params.posted_from);
    push_present(&mut pairs, "postedTo", &params.posted_to);
    push_present(&mut pairs, "awardMin", &params.award_min);
    push_present(&mut pairs, "awardMax", &params.award_max);
    push_present(&mut pairs, "limit", &params.limit);
    push_present(&mut pairs, "offset", &params.offset);

    // 補分頁預設值
    if params.limit.is_none() {
        pairs.push(("limit".to_string(), DEFAULT_LIMIT.to_string()));
    }
    if params.offset.is_none() {
        pairs.push(("offset".to_string(), DEFAULT_OFFSET.to_string()));
    }

    pairs.push(("api_key".to_string(), api_key.to_string()));

    pairs
}

/// 快取鍵：正規化後的查詢字串，不含 api_key
pub fn cache_key(params: &SearchParams) -> String {
    build_query(params, "")
        .iter()
        .filter(|(key, _)| key != "api_key")
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

fn push_present(pairs: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_string(pairs: &[(String, String)]) -> String {
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[test]
    fn test_absent_fields_never_appear() {
        let params = SearchParams {
            naics_code: Some("541511".to_string()),
            ..Default::default()
        };

        let query = query_string(&build_query(&params, "key"));

        assert!(!query.contains("keyword"));
        assert!(!query.contains("postedFrom"));
        assert!(!query.contains("postedTo"));
        assert!(!query.contains("awardMin"));
        assert!(!query.contains("awardMax"));
    }

    #[test]
    fn test_defaults_applied_exactly_once() {
        let params = SearchParams::default();
        let pairs = build_query(&params, "key");

        let limits: Vec<_> = pairs.iter().filter(|(k, _)| k == "limit").collect();
        let offsets: Vec<_> = pairs.iter().filter(|(k, _)| k == "offset").collect();

        assert_eq!(limits.len(), 1);
        assert_eq!(limits[0].1, "10");
        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets[0].1, "0");
    }

    #[test]
    fn test_explicit_pagination_overrides_defaults() {
        let params = SearchParams {
            limit: Some("25".to_string()),
            offset: Some("50".to_string()),
            ..Default::default()
        };

        let pairs = build_query(&params, "key");

        let limits: Vec<_> = pairs.iter().filter(|(k, _)| k == "limit").collect();
        assert_eq!(limits.len(), 1);
        assert_eq!(limits[0].1, "25");

        let offsets: Vec<_> = pairs.iter().filter(|(k, _)| k == "offset").collect();
        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets[0].1, "50");
    }

    #[test]
    fn test_naics_only_example() {
        let params = SearchParams {
            naics_code: Some("541511".to_string()),
            ..Default::default()
        };

        let query = query_string(&build_query(&params, "secret-key"));

        assert_eq!(query, "naicsCode=541511&limit=10&offset=0&api_key=secret-key");
    }

    #[test]
    fn test_all_fields_present() {
        let params = SearchParams {
            naics_code: Some("541511".to_string()),
            keyword: Some("cyber".to_string()),
            posted_from: Some("01/01/2025".to_string()),
            posted_to: Some("06/30/2025".to_string()),
            award_min: Some("100000".to_string()),
            award_max: Some("5000000".to_string()),
            limit: Some("20".to_string()),
            offset: Some("40".to_string()),
        };

        let pairs = build_query(&params, "key");

        assert_eq!(pairs.len(), 9); // 8 fields + api_key
        assert_eq!(pairs.last().unwrap(), &("api_key".to_string(), "key".to_string()));
    }

    #[test]
    fn test_api_key_always_appended() {
        let pairs = build_query(&SearchParams::default(), "abc");
        assert_eq!(pairs.last().unwrap(), &("api_key".to_string(), "abc".to_string()));
    }

    #[test]
    fn test_cache_key_excludes_api_key() {
        let params = SearchParams {
            naics_code: Some("541511".to_string()),
            ..Default::default()
        };

        let key = cache_key(&params);

        assert_eq!(key, "naicsCode=541511&limit=10&offset=0");
        assert!(!key.contains("api_key"));
    }

    #[test]
    fn test_cache_key_stable_for_identical_params() {
        let params = SearchParams {
            keyword: Some("construction".to_string()),
            limit: Some("5".to_string()),
            ..Default::default()
        };

        assert_eq!(cache_key(&params), cache_key(&params.clone()));
    }
}
