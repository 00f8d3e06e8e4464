//! # Processing Log Sink
//!
//! Art. 30 processing records and rights-request records flow into a
//! [`ProcessingLogSink`] owned by the caller and injected into the
//! stamper. The default [`InMemoryProcessingLog`] is a synchronized
//! append-only vector: safe under concurrent request handling, lost on
//! restart, and unbounded; a durable sink replaces it without touching
//! call sites.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use tcg_core::ProcessingId;

use crate::DataType;

/// One Art. 30 processing-activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingRecord {
    pub processing_id: ProcessingId,
    pub timestamp: DateTime<Utc>,
    pub data_type: DataType,
    pub lawful_basis: String,
    pub user_consent: bool,
    pub data_minimization: bool,
    pub purpose_limitation: String,
    pub retention_period_days: i64,
    pub controller: String,
    pub processor: String,
    pub data_categories: Vec<String>,
    pub recipients: Vec<String>,
    pub third_country_transfers: bool,
    pub technical_measures: Vec<String>,
    pub organizational_measures: Vec<String>,
}

/// One data-subject-rights request record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightsRequestRecord {
    pub timestamp: DateTime<Utc>,
    pub request_id: uuid::Uuid,
    pub request_type: String,
    pub user_id: String,
    pub compliance_officer_notified: bool,
}

/// An entry in the processing log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogRecord {
    Processing(ProcessingRecord),
    RightsRequest(RightsRequestRecord),
}

/// Append-only sink for processing and rights-request records.
///
/// Implementations must be safe for concurrent appends from request
/// handlers.
pub trait ProcessingLogSink: Send + Sync {
    /// Append one record.
    fn append(&self, record: LogRecord);

    /// Number of records appended so far.
    fn len(&self) -> usize;

    /// True when nothing has been appended.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all records, oldest first.
    fn snapshot(&self) -> Vec<LogRecord>;
}

/// In-memory processing log. Unbounded; lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryProcessingLog {
    entries: RwLock<Vec<LogRecord>>,
}

impl InMemoryProcessingLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessingLogSink for InMemoryProcessingLog {
    fn append(&self, record: LogRecord) {
        self.entries.write().push(record);
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn snapshot(&self) -> Vec<LogRecord> {
        self.entries.read().clone()
    }
}
