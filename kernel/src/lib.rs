//! Maze Kernel: the grid model and digest primitives of the maze editor.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- the rectangular cell matrix with the single Start/End invariant
//! - [`grid::Position`] -- a `(row, col)` coordinate with fixed neighbour order
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//! - [`proof::canon::canonical_json_bytes`] -- the one JSON canonicalizer
//!
//! # Module Dependency Direction
//!
//! `proof` ← `grid`
//!
//! `grid` uses `proof` for layout digests. `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
