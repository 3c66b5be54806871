use std::sync::Arc;

use crate::extraction::CriteriaExtractor;
use crate::models::employee::DirectoryRecord;
use crate::records::seed::RecordTables;

/// Shared state of the directory backend, injected into handlers via Axum extractors.
#[derive(Clone)]
pub struct DirectoryState {
    /// Seeded once at startup; read concurrently, never mutated.
    pub employees: Arc<[DirectoryRecord]>,
    /// Pluggable extractor. LLM-backed when configured, keyword otherwise.
    pub extractor: Arc<dyn CriteriaExtractor>,
}

/// Shared state of the records backend.
#[derive(Clone)]
pub struct RecordsState {
    pub tables: Arc<RecordTables>,
    pub extractor: Arc<dyn CriteriaExtractor>,
}
