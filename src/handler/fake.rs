use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    configuration::Config,
    error::Error,
    model::{HistoryItem, HistoryKind},
    provider::{ChainApi, ReputationSource},
    types::{Account, DynamicGlobalProperties},
};

/// In-memory chain keyed by pagination cursor. Cursors listed in `failing`
/// answer with an RPC error.
#[derive(Default)]
pub struct FakeChain {
    pub account: Option<Account>,
    pub fail_account: bool,
    pub properties: Option<DynamicGlobalProperties>,
    pub pages: HashMap<(HistoryKind, String), Vec<HistoryItem>>,
    pub failing: Vec<(HistoryKind, String)>,
    pub calls: Mutex<Vec<(HistoryKind, String, u32)>>,
}

impl FakeChain {
    pub fn with_page(
        mut self,
        kind: HistoryKind,
        cursor: &str,
        items: Vec<HistoryItem>,
    ) -> Self {
        self.pages.insert((kind, cursor.to_owned()), items);
        self
    }

    pub fn calls(&self) -> Vec<(HistoryKind, String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

fn rpc_error() -> Error {
    Error::Rpc {
        code: -32000,
        message: String::from("node unavailable"),
    }
}

#[async_trait]
impl ChainApi for FakeChain {
    async fn get_account(&self, _name: &str) -> Result<Option<Account>, Error> {
        if self.fail_account {
            return Err(rpc_error());
        }
        Ok(self.account.clone())
    }

    async fn get_dynamic_global_properties(
        &self,
    ) -> Result<DynamicGlobalProperties, Error> {
        self.properties.clone().ok_or_else(rpc_error)
    }

    async fn get_history_page(
        &self,
        kind: HistoryKind,
        _author: &str,
        start_permlink: &str,
        limit: u32,
    ) -> Result<Vec<HistoryItem>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((kind, start_permlink.to_owned(), limit));

        let key = (kind, start_permlink.to_owned());
        if self.failing.contains(&key) {
            return Err(rpc_error());
        }
        Ok(self.pages.get(&key).cloned().unwrap_or_default())
    }
}

pub struct FakeReputation(pub Option<f64>);

#[async_trait]
impl ReputationSource for FakeReputation {
    async fn score(&self, _account: &str) -> Option<f64> {
        self.0
    }
}

pub fn item(
    permlink: &str,
    created: DateTime<Utc>,
    voters: &[&str],
    beneficiaries: &[&str],
) -> HistoryItem {
    HistoryItem {
        permlink: permlink.to_owned(),
        created,
        voters: voters.iter().map(|v| v.to_string()).collect(),
        beneficiaries: beneficiaries.iter().map(|b| b.to_string()).collect(),
    }
}

pub fn properties(fund: &str, shares: &str) -> DynamicGlobalProperties {
    DynamicGlobalProperties {
        total_vesting_fund_hive: fund.to_owned(),
        total_vesting_shares: shares.to_owned(),
    }
}

pub fn account(name: &str) -> Account {
    Account {
        name: name.to_owned(),
        balance: String::from("12.500 HIVE"),
        hbd_balance: String::from("3.000 HBD"),
        savings_hbd_balance: String::from("100.000 HBD"),
        vesting_shares: String::from("1000.000000 VESTS"),
        delegated_vesting_shares: String::from("250.000000 VESTS"),
        received_vesting_shares: String::from("100.000000 VESTS"),
        vesting_withdraw_rate: String::from("0.000000 VESTS"),
        curation_rewards: String::from("3000"),
        posting_rewards: String::from("1000"),
    }
}

pub fn config() -> Config {
    Config {
        bot_token: String::from("secret"),
        hive_nodes: vec![String::from("https://api.hive.blog")],
        timeout: 30,
        rpc_attempts: 2,
        server_host: String::from("127.0.0.1"),
        port: 8080,
        reputation_url: None,
        profile_url: String::from("https://peakd.com/@$0"),
        avatar_url: String::from("https://images.hive.blog/u/$0/avatar"),
    }
}
