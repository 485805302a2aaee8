//! Last-result state for follow-up recommendation requests.
//!
//! A computed result outlives its query only long enough for the caller to
//! ask for guidance about it. That record is an explicit value owned by
//! the calling surface (the CLI flow here; browsers keep their own copy),
//! not process-global state.

use serde::{Deserialize, Serialize};

use crate::inference::{PosteriorOutcome, TestOutcome};
use crate::recommend::{Language, RecommendationInput};

/// The most recent computed result, as the client would retain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastCalculation {
    pub disease_name: Option<String>,
    pub prior_probability: f64,
    pub posterior_probability: f64,
    pub test_result: TestOutcome,
}

impl LastCalculation {
    /// Record a preset or custom computation.
    pub fn from_outcome(disease_name: Option<String>, outcome: &PosteriorOutcome) -> Self {
        LastCalculation {
            disease_name,
            prior_probability: outcome.prior,
            posterior_probability: outcome.posterior,
            test_result: outcome.outcome,
        }
    }

    /// Seed a recommendation request from this record.
    pub fn recommendation_input(&self, language: Language) -> RecommendationInput {
        RecommendationInput {
            disease_name: self.disease_name.clone(),
            prior: self.prior_probability,
            posterior: self.posterior_probability,
            outcome: self.test_result,
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_into_recommendation_input() {
        let outcome = PosteriorOutcome {
            prior: 0.05,
            posterior: 0.62,
            outcome: TestOutcome::Positive,
        };
        let last = LastCalculation::from_outcome(Some("HIV".to_string()), &outcome);
        let input = last.recommendation_input(Language::French);
        assert_eq!(input.disease_name.as_deref(), Some("HIV"));
        assert_eq!(input.prior, 0.05);
        assert_eq!(input.posterior, 0.62);
        assert_eq!(input.outcome, TestOutcome::Positive);
        assert_eq!(input.language, Language::French);
    }

    #[test]
    fn custom_path_has_no_disease_name() {
        let outcome = PosteriorOutcome {
            prior: 0.3,
            posterior: 0.1,
            outcome: TestOutcome::Negative,
        };
        let last = LastCalculation::from_outcome(None, &outcome);
        assert!(last.disease_name.is_none());
        assert_eq!(last.test_result, TestOutcome::Negative);
    }
}
