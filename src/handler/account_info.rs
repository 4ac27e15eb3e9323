use tracing::{error, info};

use crate::{
    error::Error,
    handler::vesting::vests_to_hp,
    helpers::extract_number,
    model::{AccountInfo, AccountLookup},
    provider::ChainApi,
};

/// Fetches one account and derives its metrics. Never fails: a missing
/// account and a failed fetch are both reported through [`AccountLookup`].
pub async fn fetch(chain: &dyn ChainApi, author: &str) -> AccountLookup {
    match get_user_info(chain, author).await {
        Ok(Some(info)) => AccountLookup::Found(info),
        Ok(None) => {
            info!("No account data found for @{}", author);
            AccountLookup::NotFound
        },
        Err(e) => {
            error!("Failed to fetch wallet info for @{}: {}", author, e);
            AccountLookup::Unavailable(e.to_string())
        },
    }
}

async fn get_user_info(
    chain: &dyn ChainApi,
    author: &str,
) -> Result<Option<AccountInfo>, Error> {
    let account = match chain.get_account(author).await? {
        Some(account) => account,
        None => return Ok(None),
    };

    let vesting_shares = extract_number(&account.vesting_shares);
    let delegated_vesting_shares =
        extract_number(&account.delegated_vesting_shares);
    let received_vesting_shares =
        extract_number(&account.received_vesting_shares);

    let hp = vests_to_hp(chain, vesting_shares).await?;
    let delegated_hp = vests_to_hp(chain, delegated_vesting_shares).await?;
    let received_hp = vests_to_hp(chain, received_vesting_shares).await?;

    let rewards = extract_number(&account.curation_rewards)
        + extract_number(&account.posting_rewards);
    let ke = (rewards / 1000.0) / hp;

    Ok(Some(AccountInfo {
        hive: extract_number(&account.balance),
        hbd: extract_number(&account.hbd_balance),
        hbd_savings: extract_number(&account.savings_hbd_balance),
        hp,
        delegated_hp,
        received_hp,
        ke,
        is_power_down: extract_number(&account.vesting_withdraw_rate) > 0.0,
        vesting_shares,
        delegated_vesting_shares,
    }))
}
