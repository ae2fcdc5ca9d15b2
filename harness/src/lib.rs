//! Maze Harness: the interactive editor session around the search engine.
//!
//! The harness owns editor state (grid, mode, selected tool, the running
//! search) and drives it through two injected capabilities: a
//! [`contract::RenderSurface`] that shows cell colours and a
//! [`contract::StepScheduler`] that calls back to advance the search.
//!
//! The harness does NOT implement search logic; it delegates to
//! `maze_search`. Pacing is the scheduler's business.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod edit;
pub mod geometry;
pub mod mode;
pub mod scheduler;
pub mod session;
pub mod status;
pub mod surface;
