//! Diagnostic Triage common types, IDs, and errors.
//!
//! This crate provides foundational types shared across dt modules:
//! - Query identity types for request tracing
//! - Schema versioning for JSON payloads
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use id::QueryId;
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
