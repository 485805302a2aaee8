//! Symptom-based disease prediction.

pub mod scorer;

pub use scorer::{score, score_all, symptom_importance, Prediction};

use dt_common::Result;

use crate::inference::{compute_posterior, DiagnosticQuery, TestOutcome};

/// False-positive rate assumed when folding a symptom score into the
/// Bayesian update. The symptom model predicts presence, not a lab test,
/// so a fixed screening-grade rate is used.
pub const SYMPTOM_FALSE_POSITIVE: f64 = 0.05;

/// Fold a symptom score into the Bayesian update, treating the model's
/// likelihood as test sensitivity on a positive observation.
///
/// The scorer clamps its outputs away from the degenerate endpoints, so
/// this cannot divide by zero on model output.
pub fn bayesian_posterior(prediction: &Prediction) -> Result<f64> {
    let query = DiagnosticQuery {
        prior: prediction.prior_probability,
        sensitivity: prediction.likelihood,
        false_positive: SYMPTOM_FALSE_POSITIVE,
        outcome: TestOutcome::Positive,
    };
    compute_posterior(&query).map(|outcome| outcome.posterior)
}
