use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{error::Error, types::Discussion};

/// Trailing window the scanner looks at.
pub const WINDOW_DAYS: i64 = 30;

/// Beneficiary account whose presence is counted per item.
pub const REWARD_APP_ACCOUNT: &str = "reward.app";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryKind {
    Post,
    Comment,
}

impl HistoryKind {
    pub fn page_size(&self) -> u32 {
        match self {
            HistoryKind::Post => 10,
            HistoryKind::Comment => 100,
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryKind::Post => write!(f, "post"),
            HistoryKind::Comment => write!(f, "comment"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub permlink: String,
    pub created: DateTime<Utc>,
    pub voters: Vec<String>,
    pub beneficiaries: Vec<String>,
}

impl HistoryItem {
    pub fn is_voted_by(&self, account: &str) -> bool {
        self.voters.iter().any(|voter| voter == account)
    }

    pub fn has_beneficiary(&self, account: &str) -> bool {
        self.beneficiaries.iter().any(|item| item == account)
    }
}

impl TryFrom<Discussion> for HistoryItem {
    type Error = Error;

    fn try_from(discussion: Discussion) -> Result<Self, Self::Error> {
        let created = NaiveDateTime::parse_from_str(
            discussion.created.trim_end_matches('Z'),
            "%Y-%m-%dT%H:%M:%S",
        )?
        .and_utc();

        Ok(HistoryItem {
            permlink: discussion.permlink,
            created,
            voters: discussion
                .active_votes
                .into_iter()
                .map(|vote| vote.voter)
                .collect(),
            beneficiaries: discussion
                .beneficiaries
                .unwrap_or_default()
                .into_iter()
                .map(|beneficiary| beneficiary.account)
                .collect(),
        })
    }
}

/// Items found inside the window, newest first, with the per-item counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryScan {
    pub items: Vec<HistoryItem>,
    pub total_self_votes: usize,
    pub total_reward_app: usize,
}

impl HistoryScan {
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn record(&mut self, author: &str, item: HistoryItem) {
        if item.is_voted_by(author) {
            self.total_self_votes += 1;
        }
        if item.has_beneficiary(REWARD_APP_ACCOUNT) {
            self.total_reward_app += 1;
        }
        self.items.push(item);
    }
}
