//! Scan History - Bounded Decision Log
//!
//! In-memory FIFO of recent decisions. Owned by the application state and
//! handed to whoever needs it - there is no global. One writer lock; a
//! scan touches it for a single push.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::threat::types::{Decision, DetectionMethod};

/// Records kept before the oldest is evicted
pub const DEFAULT_CAPACITY: usize = 100;

// ============================================================================
// SCAN RECORD
// ============================================================================

/// A decision as stored and returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: Uuid,
    /// UTC stamp assigned when the record enters the log
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub prediction: String,
    pub confidence: f32,
    pub is_safe: bool,
    pub reason: String,
    pub method: DetectionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<std::collections::BTreeMap<String, f32>>,
}

impl ScanRecord {
    fn stamp(decision: Decision) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            url: decision.url,
            prediction: decision.prediction,
            confidence: decision.confidence,
            is_safe: decision.is_safe,
            reason: decision.reason,
            method: decision.method,
            probabilities: decision.probabilities,
        }
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// Bounded scan log
pub struct ScanHistory {
    capacity: usize,
    entries: Mutex<VecDeque<ScanRecord>>,
}

impl ScanHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Stamp a decision with id + timestamp and append it. Evicts from
    /// the front once past capacity.
    pub fn record(&self, decision: Decision) -> ScanRecord {
        let record = ScanRecord::stamp(decision);

        let mut entries = self.entries.lock();
        entries.push_back(record.clone());
        while entries.len() > self.capacity {
            entries.pop_front();
        }

        record
    }

    /// Everything currently stored, oldest first
    pub fn snapshot(&self) -> Vec<ScanRecord> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for ScanHistory {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

// ============================================================================
// TESTS
// ============================================================================
