//! In-memory record of keyword matches.
//!
//! The log is a port so the bot can run with an unbounded history (the
//! default) or a fixed-size ring buffer without touching the matching code.

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::Mutex;

use crate::{
    domain::{ChatInfo, Sender},
    Result,
};

/// How many records `/lastmatches` shows.
pub const RECENT_MATCHES_LIMIT: usize = 10;

/// One message that contained at least one keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub user: Sender,
    pub chat: ChatInfo,
    pub text: String,
    pub matched_keywords: Vec<String>,
}

impl MatchRecord {
    /// Stamp a new record with the current local time.
    pub fn now(user: Sender, chat: ChatInfo, text: String, matched_keywords: Vec<String>) -> Self {
        Self {
            timestamp: local_timestamp(),
            user,
            chat,
            text,
            matched_keywords,
        }
    }
}

pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Append-only store of match records.
#[async_trait]
pub trait MatchLog: Send + Sync {
    async fn append(&self, record: MatchRecord) -> Result<()>;

    /// Up to `limit` newest records, oldest first.
    async fn recent(&self, limit: usize) -> Result<Vec<MatchRecord>>;

    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

/// Unbounded in-memory log. Grows for the lifetime of the process.
#[derive(Default)]
pub struct MemoryMatchLog {
    records: Mutex<Vec<MatchRecord>>,
}

impl MemoryMatchLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchLog for MemoryMatchLog {
    async fn append(&self, record: MatchRecord) -> Result<()> {
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<MatchRecord>> {
        let records = self.records.lock().await;
        let start = records.len().saturating_sub(limit);
        Ok(records[start..].to_vec())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.lock().await.len())
    }
}

/// Ring buffer that keeps only the newest `capacity` records.
pub struct BoundedMatchLog {
    capacity: usize,
    records: Mutex<VecDeque<MatchRecord>>,
}

impl BoundedMatchLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl MatchLog for BoundedMatchLog {
    async fn append(&self, record: MatchRecord) -> Result<()> {
        let mut records = self.records.lock().await;
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<MatchRecord>> {
        let records = self.records.lock().await;
        let skip = records.len().saturating_sub(limit);
        Ok(records.iter().skip(skip).cloned().collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.lock().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatId, UserId};

    fn record(n: usize) -> MatchRecord {
        MatchRecord::now(
            Sender {
                id: UserId(1),
                display_name: Some("Ana".to_string()),
            },
            ChatInfo::new(ChatId(2), Some("Grupo"), None),
            format!("mensaje {n} con nequi"),
            vec!["nequi".to_string()],
        )
    }

    #[test]
    fn timestamp_has_expected_shape() {
        let ts = local_timestamp();
        assert_eq!(ts.len(), 19);
        let b = ts.as_bytes();
        assert_eq!((b[4], b[7], b[10], b[13], b[16]), (b'-', b'-', b' ', b':', b':'));
    }

    #[tokio::test]
    async fn memory_log_starts_empty() {
        let log = MemoryMatchLog::new();
        assert!(log.is_empty().await.unwrap());
        assert!(log.recent(RECENT_MATCHES_LIMIT).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_log_recent_returns_newest_oldest_first() {
        let log = MemoryMatchLog::new();
        for n in 0..15 {
            log.append(record(n)).await.unwrap();
        }
        assert_eq!(log.len().await.unwrap(), 15);

        let recent = log.recent(RECENT_MATCHES_LIMIT).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].text, "mensaje 5 con nequi");
        assert_eq!(recent[9].text, "mensaje 14 con nequi");
    }

    #[tokio::test]
    async fn memory_log_recent_with_fewer_records_than_limit() {
        let log = MemoryMatchLog::new();
        for n in 0..3 {
            log.append(record(n)).await.unwrap();
        }
        let recent = log.recent(RECENT_MATCHES_LIMIT).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].text, "mensaje 0 con nequi");
    }

    #[tokio::test]
    async fn bounded_log_drops_oldest() {
        let log = BoundedMatchLog::new(4);
        for n in 0..6 {
            log.append(record(n)).await.unwrap();
        }
        assert_eq!(log.len().await.unwrap(), 4);

        let all = log.recent(100).await.unwrap();
        let texts: Vec<&str> = all.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "mensaje 2 con nequi",
                "mensaje 3 con nequi",
                "mensaje 4 con nequi",
                "mensaje 5 con nequi",
            ]
        );
        assert_eq!(log.recent(2).await.unwrap()[0].text, "mensaje 4 con nequi");
    }

    #[tokio::test]
    async fn bounded_log_zero_capacity_keeps_one() {
        let log = BoundedMatchLog::new(0);
        assert_eq!(log.capacity(), 1);
        log.append(record(0)).await.unwrap();
        log.append(record(1)).await.unwrap();
        assert_eq!(log.recent(10).await.unwrap()[0].text, "mensaje 1 con nequi");
    }
}
