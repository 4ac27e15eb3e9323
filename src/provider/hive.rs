use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use super::{
    chain::ChainApi,
    node_pool::{Node, NodePool},
};
use crate::{
    configuration::Config,
    error::{self, Error},
    model::{HistoryItem, HistoryKind},
    types::{
        Account, Discussion, DynamicGlobalProperties, RpcRequest, RpcResponse,
    },
};

/// JSON-RPC client for Hive API nodes. A transport or decode failure rotates
/// the pool away from the node that failed, so the next attempt, and every
/// later call, goes to another node. JSON-RPC error objects are returned as
/// they are.
#[derive(Debug)]
pub struct Hive {
    nodes: NodePool,
    http: Client,
    attempts: usize,
    id: AtomicU64,
}

impl Hive {
    pub fn new(config: &Config) -> Result<Hive, Error> {
        let http = match Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                return Err(error::Error::REQWEST(e));
            },
        };

        Ok(Hive {
            nodes: NodePool::new(&config.hive_nodes)?,
            http,
            attempts: config.rpc_attempts.max(1),
            id: AtomicU64::new(1),
        })
    }

    pub async fn call<P, T>(&self, method: &str, params: P) -> Result<T, Error>
    where
        P: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let mut attempt = 1;

        loop {
            let node = self.nodes.current();
            match self.call_node(&node, method, &params).await {
                Ok(result) => return Ok(result),
                Err(err @ Error::Rpc { .. }) => return Err(err),
                Err(err) => {
                    warn!(
                        "RPC {} failed on {} (attempt {}/{}): {}",
                        method, node.url, attempt, self.attempts, err
                    );
                    self.nodes.rotate_from(&node);

                    if attempt >= self.attempts {
                        return Err(err);
                    }
                    attempt += 1;
                },
            }
        }
    }

    async fn call_node<P, T>(
        &self,
        node: &Node,
        method: &str,
        params: &P,
    ) -> Result<T, Error>
    where
        P: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let id = self.id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        let response = self
            .http
            .post(node.url.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<RpcResponse<T>>()
            .await?;

        into_result(response)
    }
}

fn into_result<T>(response: RpcResponse<T>) -> Result<T, Error> {
    if let Some(err) = response.error {
        return Err(Error::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    let result = response.result.context("RPC response without result")?;
    Ok(result)
}

fn history_request(
    kind: HistoryKind,
    author: &str,
    start_permlink: &str,
    limit: u32,
) -> (&'static str, Value) {
    match kind {
        HistoryKind::Post => (
            "condenser_api.get_discussions_by_author_before_date",
            json!([author, start_permlink, "", limit]),
        ),
        HistoryKind::Comment => (
            "condenser_api.get_discussions_by_comments",
            json!([{
                "start_author": author,
                "start_permlink": start_permlink,
                "limit": limit,
            }]),
        ),
    }
}

/// Continuation pages start with the cursor item itself; drop it.
fn history_page(
    discussions: Vec<Discussion>,
    author: &str,
    start_permlink: &str,
) -> Result<Vec<HistoryItem>, Error> {
    discussions
        .into_iter()
        .filter(|item| {
            start_permlink.is_empty()
                || item.author != author
                || item.permlink != start_permlink
        })
        .map(HistoryItem::try_from)
        .collect()
}

#[async_trait]
impl ChainApi for Hive {
    async fn get_account(&self, name: &str) -> Result<Option<Account>, Error> {
        let accounts: Vec<Account> =
            self.call("condenser_api.get_accounts", json!([[name]])).await?;

        Ok(accounts.into_iter().next())
    }

    async fn get_dynamic_global_properties(
        &self,
    ) -> Result<DynamicGlobalProperties, Error> {
        self.call("condenser_api.get_dynamic_global_properties", json!([]))
            .await
    }

    async fn get_history_page(
        &self,
        kind: HistoryKind,
        author: &str,
        start_permlink: &str,
        limit: u32,
    ) -> Result<Vec<HistoryItem>, Error> {
        let (method, params) =
            history_request(kind, author, start_permlink, limit);
        let discussions: Vec<Discussion> = self.call(method, params).await?;

        history_page(discussions, author, start_permlink)
    }
}
