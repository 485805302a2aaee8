//! Inference engine modules.

pub mod posterior;

pub use posterior::{
    compute_posterior, resolve_preset, DiagnosticQuery, PosteriorOutcome, TestOutcome,
};
