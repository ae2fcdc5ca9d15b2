//! Proof module: canonical JSON, typed hash domains, content hashes.
//!
//! Depends on nothing internal. `grid` and the downstream crates route every
//! digest through here.

pub mod canon;
pub mod hash;
pub mod hash_domain;
