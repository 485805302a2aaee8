//! Validated Bayesian posterior queries.
//!
//! This sits between the raw formulas in dt-math and the wire/CLI
//! surfaces: inputs are range-checked with the field names clients see,
//! preset names are resolved through the registry, and degenerate
//! denominators surface as typed errors.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use dt_common::{Error, Result};
use dt_config::DiseaseRegistry;
use dt_math::{posterior_negative, posterior_positive, PosteriorError};

/// Observed test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Positive,
    Negative,
}

impl TestOutcome {
    /// Parse the wire form, case-insensitively.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(TestOutcome::Positive),
            "negative" => Ok(TestOutcome::Negative),
            other => Err(Error::InvalidTestResult(other.to_string())),
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Positive => write!(f, "positive"),
            TestOutcome::Negative => write!(f, "negative"),
        }
    }
}

/// One fully-specified probability query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticQuery {
    /// P(disease): prevalence or pre-test probability.
    pub prior: f64,
    /// P(test positive | disease).
    pub sensitivity: f64,
    /// P(test positive | no disease).
    pub false_positive: f64,
    pub outcome: TestOutcome,
}

/// Computed posterior with its echoed prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PosteriorOutcome {
    pub prior: f64,
    pub posterior: f64,
    pub outcome: TestOutcome,
}

/// Compute P(disease | test result) for a query.
///
/// Inputs are validated against [0, 1] before any arithmetic; the field
/// names in errors match the client-facing form names.
pub fn compute_posterior(query: &DiagnosticQuery) -> Result<PosteriorOutcome> {
    for (name, value) in [
        ("Prevalence", query.prior),
        ("Sensitivity", query.sensitivity),
        ("FalsePositive", query.false_positive),
    ] {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(Error::ProbabilityOutOfRange { name, value });
        }
    }

    let result = match query.outcome {
        TestOutcome::Positive => {
            posterior_positive(query.prior, query.sensitivity, query.false_positive)
        }
        TestOutcome::Negative => {
            posterior_negative(query.prior, query.sensitivity, query.false_positive)
        }
    };

    let posterior = result.map_err(|e| match e {
        PosteriorError::ZeroDenominator => Error::DegenerateDenominator,
        PosteriorError::OutOfRange { name: _, value } => Error::ProbabilityOutOfRange {
            name: "Prevalence",
            value,
        },
    })?;

    Ok(PosteriorOutcome {
        prior: query.prior,
        posterior,
        outcome: query.outcome,
    })
}

/// Resolve a named preset to a positive-test query.
///
/// Preset selection models "patient tested positive for <disease>", so the
/// outcome is always positive.
pub fn resolve_preset(registry: &DiseaseRegistry, name: &str) -> Result<DiagnosticQuery> {
    let entry = registry.lookup(name).ok_or_else(|| Error::UnknownDisease {
        name: name.to_string(),
    })?;
    Ok(DiagnosticQuery {
        prior: entry.prevalence,
        sensitivity: entry.sensitivity,
        false_positive: entry.false_positive,
        outcome: TestOutcome::Positive,
    })
}
