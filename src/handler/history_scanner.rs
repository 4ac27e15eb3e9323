use chrono::{DateTime, Duration, Utc};
use tracing::error;

use crate::{
    model::{HistoryKind, HistoryScan, WINDOW_DAYS},
    provider::ChainApi,
};

pub async fn scan_recent(
    chain: &dyn ChainApi,
    author: &str,
    kind: HistoryKind,
) -> HistoryScan {
    scan(chain, author, kind, Utc::now()).await
}

/// Walks the author's history backwards from the newest item, collecting
/// everything created within [`WINDOW_DAYS`] of `now`.
///
/// Stops at the first item older than the cutoff, on an empty page, or on a
/// fetch error. In every case the items gathered so far are returned.
pub async fn scan(
    chain: &dyn ChainApi,
    author: &str,
    kind: HistoryKind,
    now: DateTime<Utc>,
) -> HistoryScan {
    let cutoff = now - Duration::days(WINDOW_DAYS);
    let mut scan = HistoryScan::default();
    let mut cursor = String::new();

    loop {
        let page = match chain
            .get_history_page(kind, author, &cursor, kind.page_size())
            .await
        {
            Ok(page) => page,
            Err(e) => {
                error!("Error fetching {}s by @{}: {}", kind, author, e);
                return scan;
            },
        };

        let next = match page.last() {
            Some(item) if item.permlink != cursor => item.permlink.to_owned(),
            _ => return scan,
        };

        for item in page {
            if item.created < cutoff {
                return scan;
            }
            scan.record(author, item);
        }

        cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{
        handler::fake::{item, FakeChain},
        model::{HistoryItem, REWARD_APP_ACCOUNT},
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        now() - Duration::days(days)
    }

    fn recent_page(prefix: &str, count: usize) -> Vec<HistoryItem> {
        (0..count)
            .map(|index| {
                item(
                    &format!("{}-{}", prefix, index),
                    days_ago(1),
                    &["bob"],
                    &[],
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn stops_at_first_item_outside_window() {
        let chain = FakeChain::default().with_page(
            HistoryKind::Post,
            "",
            vec![
                item("self-voted", days_ago(1), &["bob", "alice"], &[]),
                item("rewarded", days_ago(5), &["bob"], &[REWARD_APP_ACCOUNT]),
                item("plain", days_ago(10), &[], &["carol"]),
                item("old", days_ago(31), &["alice"], &[REWARD_APP_ACCOUNT]),
            ],
        );

        let result = scan(&chain, "alice", HistoryKind::Post, now()).await;

        assert_eq!(result.total_items(), 3);
        assert_eq!(result.total_self_votes, 1);
        assert_eq!(result.total_reward_app, 1);
        assert_eq!(chain.calls().len(), 1);
        assert!(result.items.iter().all(|item| item.permlink != "old"));
    }

    #[tokio::test]
    async fn full_page_fetches_next_page_from_last_key() {
        let chain = FakeChain::default()
            .with_page(HistoryKind::Post, "", recent_page("post", 10))
            .with_page(
                HistoryKind::Post,
                "post-9",
                vec![
                    item("older", days_ago(20), &["alice"], &[]),
                    item("oldest", days_ago(40), &[], &[]),
                ],
            );

        let result = scan(&chain, "alice", HistoryKind::Post, now()).await;

        assert_eq!(
            chain.calls(),
            vec![
                (HistoryKind::Post, String::new(), 10),
                (HistoryKind::Post, String::from("post-9"), 10),
            ]
        );
        assert_eq!(result.total_items(), 11);
        assert_eq!(result.total_self_votes, 1);
        assert_eq!(result.items.last().unwrap().permlink, "older");
    }

    #[tokio::test]
    async fn empty_page_ends_scan() {
        let chain = FakeChain::default().with_page(
            HistoryKind::Comment,
            "",
            recent_page("comment", 3),
        );

        let result = scan(&chain, "alice", HistoryKind::Comment, now()).await;

        assert_eq!(result.total_items(), 3);
        assert_eq!(
            chain.calls(),
            vec![
                (HistoryKind::Comment, String::new(), 100),
                (HistoryKind::Comment, String::from("comment-2"), 100),
            ]
        );
    }

    #[tokio::test]
    async fn author_without_history_is_empty() {
        let chain = FakeChain::default();

        let result = scan(&chain, "alice", HistoryKind::Post, now()).await;

        assert_eq!(result, HistoryScan::default());
        assert_eq!(result.total_items(), 0);
        assert_eq!(result.total_self_votes, 0);
        assert_eq!(result.total_reward_app, 0);
    }

    #[tokio::test]
    async fn fetch_error_keeps_partial_result() {
        let mut chain = FakeChain::default()
            .with_page(HistoryKind::Post, "", recent_page("post", 10));
        chain
            .failing
            .push((HistoryKind::Post, String::from("post-9")));

        let result = scan(&chain, "alice", HistoryKind::Post, now()).await;

        assert_eq!(result.total_items(), 10);
        assert_eq!(chain.calls().len(), 2);
    }

    #[tokio::test]
    async fn cutoff_is_inclusive() {
        let cutoff = now() - Duration::days(WINDOW_DAYS);
        let chain = FakeChain::default().with_page(
            HistoryKind::Post,
            "",
            vec![
                item("edge", cutoff, &[], &[]),
                item("just-before", cutoff - Duration::seconds(1), &[], &[]),
            ],
        );

        let result = scan(&chain, "alice", HistoryKind::Post, now()).await;

        assert_eq!(result.total_items(), 1);
        assert_eq!(result.items[0].permlink, "edge");
        assert!(result.items.iter().all(|item| item.created >= cutoff));
    }

    #[tokio::test]
    async fn repeated_cursor_does_not_loop() {
        let chain = FakeChain::default()
            .with_page(HistoryKind::Post, "", recent_page("post", 1))
            .with_page(HistoryKind::Post, "post-0", recent_page("post", 1));

        let result = scan(&chain, "alice", HistoryKind::Post, now()).await;

        assert_eq!(result.total_items(), 1);
        assert_eq!(chain.calls().len(), 2);
    }
}
