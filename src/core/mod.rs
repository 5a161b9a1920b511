pub mod ai;
pub mod cache;
pub mod client;
pub mod query;

pub use crate::domain::model::{BidRequest, BidResponse, Opportunity, OpportunitiesResponse, SearchParams};
pub use crate::domain::ports::{BidGenerator, ConfigProvider, OpportunitySource};
pub use crate::utils::error::Result;
