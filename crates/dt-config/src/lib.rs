//! Diagnostic Triage configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the disease registry and the symptom model
//! - Embedded defaults so the engine works with no files on disk
//! - Config resolution (CLI path → env → XDG data dir → embedded)
//! - Schema and semantic validation

pub mod model;
pub mod registry;
pub mod resolve;
pub mod validate;

pub use model::{DiseaseWeights, SymptomModel};
pub use registry::{DiseaseEntry, DiseaseRegistry};
pub use resolve::{resolve_model, resolve_registry, ConfigPaths};
pub use validate::ValidationError;

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
