use serde::Deserialize;

use crate::helpers::loose_string;

#[derive(Debug, Deserialize, Clone)]
pub struct DynamicGlobalProperties {
    #[serde(deserialize_with = "loose_string")]
    pub total_vesting_fund_hive: String,
    #[serde(deserialize_with = "loose_string")]
    pub total_vesting_shares: String,
}
