//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: chat-completion models used by the pipeline
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
