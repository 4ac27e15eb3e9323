use crate::{
    error::Error, helpers::extract_number, provider::ChainApi,
    types::DynamicGlobalProperties,
};

/// Exchange rate between vesting shares and HP at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VestingRatio {
    pub total_vesting_fund: f64,
    pub total_vesting_shares: f64,
}

impl VestingRatio {
    pub fn from_properties(properties: &DynamicGlobalProperties) -> Self {
        VestingRatio {
            total_vesting_fund: extract_number(
                &properties.total_vesting_fund_hive,
            ),
            total_vesting_shares: extract_number(
                &properties.total_vesting_shares,
            ),
        }
    }

    /// Not guarded against zero total shares: the result is then non-finite
    /// and callers render it as unavailable.
    pub fn to_hp(&self, vests: f64) -> f64 {
        (self.total_vesting_fund * vests) / self.total_vesting_shares
    }
}

pub async fn vests_to_hp(
    chain: &dyn ChainApi,
    vests: f64,
) -> Result<f64, Error> {
    let properties = chain.get_dynamic_global_properties().await?;
    Ok(VestingRatio::from_properties(&properties).to_hp(vests))
}
