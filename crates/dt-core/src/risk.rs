//! Risk classification for computed probabilities.

use serde::{Deserialize, Serialize};

/// Risk bands over the posterior probability, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Classify a probability expressed in percent (0-100).
    pub fn from_percent(probability: f64) -> Self {
        if probability < 30.0 {
            RiskLevel::Low
        } else if probability < 60.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Severity color token used by clients.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "success",
            RiskLevel::Moderate => "warning",
            RiskLevel::High => "danger",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low probability of disease",
            RiskLevel::Moderate => "Moderate probability - consider further testing",
            RiskLevel::High => "High probability - immediate medical consultation recommended",
        }
    }
}

/// Wire form of a risk classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: String,
    pub color: String,
    pub description: String,
}

impl RiskAssessment {
    pub fn from_percent(probability: f64) -> Self {
        let level = RiskLevel::from_percent(probability);
        RiskAssessment {
            level: level.label().to_string(),
            color: level.color().to_string(),
            description: level.description().to_string(),
        }
    }
}
