use async_trait::async_trait;

use crate::{
    error::Error,
    model::{HistoryItem, HistoryKind},
    types::{Account, DynamicGlobalProperties},
};

/// Read access to the blockchain. `get_history_page` returns items strictly
/// older than `start_permlink`, newest first; an empty key means most recent.
#[async_trait]
pub trait ChainApi: Send + Sync {
    async fn get_account(&self, name: &str) -> Result<Option<Account>, Error>;

    async fn get_dynamic_global_properties(
        &self,
    ) -> Result<DynamicGlobalProperties, Error>;

    async fn get_history_page(
        &self,
        kind: HistoryKind,
        author: &str,
        start_permlink: &str,
        limit: u32,
    ) -> Result<Vec<HistoryItem>, Error>;
}
