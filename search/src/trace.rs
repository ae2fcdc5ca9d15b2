//! `SearchTraceV1`: ordered log of every step a search took.
//!
//! The trace is the determinism surface: two searches over identical grids
//! must produce byte-identical canonical JSON and the same chain digest.
//!
//! # Chain
//!
//! ```text
//! h0 = sha256(DOMAIN_SEARCH_TRACE_SEED  || 0^32 || canonical(header))
//! hi = sha256(DOMAIN_SEARCH_TRACE_CHAIN || h(i-1) || canonical(record_i))
//! ```
//!
//! The termination record, once present, is the last link.

use maze_kernel::grid::{Grid, Position};
use maze_kernel::proof::canon::{canonical_json_bytes, CanonError};
use maze_kernel::proof::hash::{
    canonical_hash, chain_hash, content_hash_from_raw, ContentHash,
};
use maze_kernel::proof::hash_domain::HashDomain;
use serde_json::{json, Value};
use tracing::error;

use crate::delta::StepDelta;
use crate::path::{BrokenChain, FinalPath};

/// Schema tag embedded in the trace header.
pub const TRACE_SCHEMA_VERSION: &str = "maze_search_trace.v1";

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationV1 {
    /// End was dequeued and the path reconstructed.
    Found { path: Vec<Position> },
    /// End was dequeued but the predecessor chain was broken.
    FoundBrokenChain { at: Position, partial: Vec<Position> },
    /// The frontier emptied without reaching End.
    NotFound,
}

impl TerminationV1 {
    pub(crate) fn from_reconstruction(result: &Result<FinalPath, BrokenChain>) -> Self {
        match result {
            Ok(path) => Self::Found {
                path: path.cells().to_vec(),
            },
            Err(broken) => Self::FoundBrokenChain {
                at: broken.at,
                partial: broken.partial.clone(),
            },
        }
    }
}

/// One expansion as recorded in the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecordV1 {
    pub index: u64,
    pub current: Position,
    pub enqueued: Vec<Position>,
}

impl From<&StepDelta> for TraceRecordV1 {
    fn from(delta: &StepDelta) -> Self {
        Self {
            index: delta.index,
            current: delta.current,
            enqueued: delta.enqueued.clone(),
        }
    }
}

/// The complete step log of one search.
#[derive(Debug, Clone)]
pub struct SearchTraceV1 {
    pub rows: usize,
    pub cols: usize,
    pub layout_digest: ContentHash,
    pub start: Position,
    pub end: Position,
    pub records: Vec<TraceRecordV1>,
    pub termination: Option<TerminationV1>,
    chain: [u8; 32],
}

impl SearchTraceV1 {
    /// Open a trace for a search over `grid` from `start` to `end`.
    #[must_use]
    pub fn open(grid: &Grid, start: Position, end: Position) -> Self {
        let mut trace = Self {
            rows: grid.rows(),
            cols: grid.cols(),
            layout_digest: grid.layout_digest(),
            start,
            end,
            records: Vec::new(),
            termination: None,
            chain: [0u8; 32],
        };
        trace.chain = link(HashDomain::SearchTraceSeed, &[0u8; 32], &trace.header_json());
        trace
    }

    pub(crate) fn push_step(&mut self, delta: &StepDelta) {
        let record = TraceRecordV1::from(delta);
        self.chain = link(
            HashDomain::SearchTraceChain,
            &self.chain,
            &record_to_json(&record),
        );
        self.records.push(record);
    }

    pub(crate) fn terminate(&mut self, termination: TerminationV1) {
        if self.termination.is_some() {
            return;
        }
        self.chain = link(
            HashDomain::SearchTraceChain,
            &self.chain,
            &termination_to_json(&termination),
        );
        self.termination = Some(termination);
    }

    /// Head of the step chain.
    #[must_use]
    pub fn chain_digest(&self) -> ContentHash {
        content_hash_from_raw(&self.chain)
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails (never for well-formed
    /// traces, which contain integers only).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from serialization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }

    fn header_json(&self) -> Value {
        json!({
            "cols": self.cols,
            "end": pos_json(self.end),
            "layout_digest": self.layout_digest.as_str(),
            "rows": self.rows,
            "schema_version": TRACE_SCHEMA_VERSION,
            "start": pos_json(self.start),
        })
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "chain_digest": self.chain_digest().as_str(),
            "header": self.header_json(),
            "steps": self.records.iter().map(record_to_json).collect::<Vec<_>>(),
            "termination": self.termination.as_ref().map(termination_to_json),
        })
    }
}

fn link(domain: HashDomain, prev: &[u8; 32], value: &Value) -> [u8; 32] {
    // Trace values hold integers and strings only.
    match canonical_json_bytes(value) {
        Ok(bytes) => chain_hash(domain, prev, &bytes),
        Err(err) => {
            error!(error = %err, ?domain, "trace value failed to canonicalize");
            chain_hash(domain, prev, err.to_string().as_bytes())
        }
    }
}

fn pos_json(pos: Position) -> Value {
    json!([pos.row, pos.col])
}

fn path_json(cells: &[Position]) -> Value {
    Value::Array(cells.iter().copied().map(pos_json).collect())
}

fn record_to_json(r: &TraceRecordV1) -> Value {
    json!({
        "current": pos_json(r.current),
        "enqueued": path_json(&r.enqueued),
        "index": r.index,
    })
}

fn termination_to_json(t: &TerminationV1) -> Value {
    match t {
        TerminationV1::Found { path } => json!({
            "path": path_json(path),
            "path_len": path.len().saturating_sub(1),
            "type": "found",
        }),
        TerminationV1::FoundBrokenChain { at, partial } => json!({
            "at": pos_json(*at),
            "partial": path_json(partial),
            "type": "found_broken_chain",
        }),
        TerminationV1::NotFound => json!({"type": "not_found"}),
    }
}
