use serde::Deserialize;

use crate::helpers::loose_string;

/// Raw account state as returned by `condenser_api.get_accounts`.
#[derive(Debug, Deserialize, Clone)]
pub struct Account {
    pub name: String,
    #[serde(deserialize_with = "loose_string")]
    pub balance: String,
    #[serde(deserialize_with = "loose_string")]
    pub hbd_balance: String,
    #[serde(deserialize_with = "loose_string")]
    pub savings_hbd_balance: String,
    #[serde(deserialize_with = "loose_string")]
    pub vesting_shares: String,
    #[serde(deserialize_with = "loose_string")]
    pub delegated_vesting_shares: String,
    #[serde(deserialize_with = "loose_string")]
    pub received_vesting_shares: String,
    #[serde(deserialize_with = "loose_string")]
    pub vesting_withdraw_rate: String,
    #[serde(deserialize_with = "loose_string")]
    pub curation_rewards: String,
    #[serde(deserialize_with = "loose_string")]
    pub posting_rewards: String,
}
