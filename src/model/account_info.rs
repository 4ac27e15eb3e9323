/// Metrics derived from one account snapshot. Stake values are in HP, the
/// raw share counts are kept for the delegation ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub hive: f64,
    pub hbd: f64,
    pub hbd_savings: f64,
    pub hp: f64,
    pub delegated_hp: f64,
    pub received_hp: f64,
    pub ke: f64,
    pub is_power_down: bool,
    pub vesting_shares: f64,
    pub delegated_vesting_shares: f64,
}

impl AccountInfo {
    /// Share of own stake delegated out, computed on raw vesting shares.
    pub fn delegated_percentage(&self) -> f64 {
        (self.delegated_vesting_shares / self.vesting_shares) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccountLookup {
    Found(AccountInfo),
    NotFound,
    Unavailable(String),
}

impl AccountLookup {
    pub fn found(self) -> Option<AccountInfo> {
        match self {
            AccountLookup::Found(info) => Some(info),
            AccountLookup::NotFound | AccountLookup::Unavailable(_) => None,
        }
    }
}
