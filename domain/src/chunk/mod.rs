//! Chunking domain.
//!
//! A comment history is too large for one model request, so it is split into
//! contiguous [`ChunkRange`](entities::ChunkRange)s whose word totals stay
//! under a target. Each range is analyzed independently and produces a
//! [`ChunkResult`](entities::ChunkResult).
//!
//! - [`planner`]: target sizing and greedy range planning
//! - [`cache_key`]: content hash that decides whether cached results apply

pub mod cache_key;
pub mod entities;
pub mod planner;
