use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// One URL change. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    path: String,
    query_string: String,
    timestamp: u64,
    recorded_at: DateTime<Utc>,
}

impl NavigationState {
    pub(crate) fn new(path: &str, query_string: Option<&str>, timestamp: u64) -> Self {
        Self {
            path: path.to_string(),
            query_string: query_string.unwrap_or_default().to_string(),
            timestamp,
            recorded_at: Utc::now(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Monotonic sequence number assigned by the router
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Wall-clock time the navigation was recorded
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// The fragment this state was created from
    pub fn fragment(&self) -> String {
        if self.query_string.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string)
        }
    }
}

/// Tags work started for a navigation so its result can be dropped once a
/// newer navigation has become active.
#[derive(Debug, Clone)]
pub struct NavigationToken {
    seq: u64,
    active: Arc<AtomicU64>,
}

impl NavigationToken {
    pub(crate) fn new(seq: u64, active: Arc<AtomicU64>) -> Self {
        Self { seq, active }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Sequence number of the navigation active right now
    pub fn active_seq(&self) -> u64 {
        self.active.load(Ordering::Acquire)
    }

    pub fn is_current(&self) -> bool {
        self.active_seq() == self.seq
    }
}
