//! Maze Search: incremental breadth-first search over a maze grid.
//!
//! This crate depends only on `maze_kernel`; it does NOT depend on
//! `maze_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! maze_kernel  ←  maze_search  ←  maze_harness
//! (grid, hashes)  (BFS stepper)   (modes, edits, scheduling)
//! ```
//!
//! # Key types
//!
//! - [`engine::SearchEngine`]: one `step()` expands at most one frontier cell
//! - [`engine::StepOutcome`]: what a step did (expanded / found / not found)
//! - [`delta::StepDelta`]: the per-step change set for renderers
//! - [`path::reconstruct`]: predecessor walk from End back to Start
//! - [`trace::SearchTraceV1`]: ordered step log with a chained digest

#![forbid(unsafe_code)]

pub mod delta;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod path;
pub mod trace;
