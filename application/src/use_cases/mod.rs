//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_chunks;
pub mod build_profile;
pub mod synthesize_profile;
