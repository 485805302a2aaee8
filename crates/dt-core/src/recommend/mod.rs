//! Guidance text generation for computed results.
//!
//! Recommendations are rendered locally from per-language templates keyed
//! by risk band. Output is markdown, matching what clients already render.

pub mod templates;

use serde::{Deserialize, Serialize};

use dt_common::{Error, Result};

use crate::inference::TestOutcome;
use crate::risk::RiskLevel;

/// Output language for recommendation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
}

impl Language {
    /// Lenient parse of the wire `language` field. Unknown values fall
    /// back to English rather than failing the request.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "spanish" | "es" | "español" | "espanol" => Language::Spanish,
            "french" | "fr" | "français" | "francais" => Language::French,
            _ => Language::English,
        }
    }
}

/// Everything needed to phrase guidance for one computed result.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationInput {
    /// None for the custom-input path.
    pub disease_name: Option<String>,
    pub prior: f64,
    pub posterior: f64,
    pub outcome: TestOutcome,
    pub language: Language,
}

/// Render recommendation markdown for a result.
///
/// Probabilities are validated against [0, 1] first; the caller decides
/// how to surface the error envelope.
pub fn generate(input: &RecommendationInput) -> Result<String> {
    for (name, value) in [
        ("PriorProbability", input.prior),
        ("PosteriorProbability", input.posterior),
    ] {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(Error::ProbabilityOutOfRange { name, value });
        }
    }

    let risk = RiskLevel::from_percent(input.posterior * 100.0);
    Ok(templates::render(input, risk))
}
