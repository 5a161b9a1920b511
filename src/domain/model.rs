use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 上游搜尋 API 的查詢參數（全部為可選字串）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub naics_code: Option<String>,
    pub keyword: Option<String>,
    pub posted_from: Option<String>,
    pub posted_to: Option<String>,
    pub award_min: Option<String>,
    pub award_max: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// 上游回應的外層結構
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitiesResponse {
    pub total_records: Option<u64>,
    #[serde(default)]
    pub opportunities_data: Vec<Opportunity>,
}

/// 單筆商機記錄，鏡射上游 schema；本系統不擁有也不修改這個形狀
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: Option<String>,
    pub title: Option<String>,
    pub solicitation_number: Option<String>,
    pub full_parent_path_name: Option<String>,
    pub full_parent_path_code: Option<String>,
    pub posted_date: Option<String>,
    #[serde(rename = "type")]
    pub opportunity_type: Option<String>,
    pub base_type: Option<String>,
    pub archive_type: Option<String>,
    pub archive_date: Option<String>,
    pub set_aside: Option<String>,
    pub set_aside_code: Option<String>,
    pub naics_code: Option<String>,
    pub naics_desc: Option<String>,
    pub class_cod: Option<String>,
    pub class_desc: Option<String>,
    pub active: Option<String>,
    pub award: Option<Award>,
    #[serde(default)]
    pub point_of_contact: Vec<PointOfContact>,
    pub description: Option<String>,
    pub organization_type: Option<String>,
    pub office_address: Option<Address>,
    pub place_of_performance: Option<Address>,
    pub additional_info_link: Option<String>,
    pub ui_link: Option<String>,
    #[serde(default)]
    pub links: Vec<OpportunityLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub amount: Option<String>,
    pub date: Option<String>,
    pub awardee: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityLink {
    pub rel: Option<String>,
    pub href: Option<String>,
}

/// 投標書生成請求；缺少的欄位套用預設值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub prompt: Option<String>,
    pub opportunity_id: Option<String>,
    #[serde(default = "default_bid_type")]
    pub bid_type: String,
    #[serde(default = "default_include")]
    pub include_resumes: bool,
    #[serde(default = "default_include")]
    pub include_past_performance: bool,
}

fn default_bid_type() -> String {
    "full".to_string()
}

fn default_include() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    pub opportunity_id: Option<String>,
    pub bid_type: String,
    pub include_resumes: bool,
    pub include_past_performance: bool,
    pub text: String,
    pub summary: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSummary {
    pub text: String,
    pub summary: String,
}
