//! Logistic symptom scoring.
//!
//! Each disease score is sigmoid(bias + Σ weights of matched symptoms).
//! The raw score is then mapped to a Bayesian prior (clamped away from the
//! degenerate endpoints) and a likelihood in [0.75, 0.95] so the posterior
//! update downstream never divides by zero on model output.

use std::cmp::Ordering;

use dt_common::{Error, Result};
use dt_config::{model::title_case, SymptomModel};
use dt_math::{clamp, sigmoid};

const PRIOR_FLOOR: f64 = 0.05;
const PRIOR_CEIL: f64 = 0.95;
const LIKELIHOOD_BASE: f64 = 0.75;
const LIKELIHOOD_SPAN: f64 = 0.20;

/// Symptoms counted toward full confidence.
const CONFIDENCE_SYMPTOM_NORM: f64 = 5.0;

/// One disease's score for a reported symptom set.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Model key, e.g. `heart_disease`.
    pub disease: String,
    /// Human-readable disease name, e.g. `Heart Disease`.
    pub display_name: String,
    pub raw_probability: f64,
    /// Raw score mapped into [0.05, 0.95] for use as a Bayesian prior.
    pub prior_probability: f64,
    /// Raw score mapped into [0.75, 0.95] for use as test sensitivity.
    pub likelihood: f64,
    pub symptoms_matched: usize,
    pub total_symptoms: usize,
    pub confidence_score: f64,
}

/// Score one disease against reported symptoms.
///
/// Unrecognized symptom keys are ignored rather than rejected; only the
/// matched subset contributes weight.
pub fn score(model: &SymptomModel, disease: &str, symptoms: &[String]) -> Result<Prediction> {
    if symptoms.is_empty() {
        return Err(Error::NoSymptoms);
    }
    let weights = model.weights(disease).ok_or_else(|| Error::UnknownDisease {
        name: disease.to_string(),
    })?;

    let mut z = weights.bias;
    let mut matched = 0usize;
    for symptom in symptoms {
        if let Some(weight) = weights.symptoms.get(symptom) {
            z += weight;
            matched += 1;
        }
    }

    let raw = sigmoid(z);
    Ok(Prediction {
        disease: disease.to_string(),
        display_name: title_case(disease),
        raw_probability: raw,
        prior_probability: clamp(raw, PRIOR_FLOOR, PRIOR_CEIL),
        likelihood: LIKELIHOOD_BASE + raw * LIKELIHOOD_SPAN,
        symptoms_matched: matched,
        total_symptoms: symptoms.len(),
        confidence_score: confidence(matched, raw),
    })
}

/// Score every modeled disease for a differential view, sorted by
/// descending raw probability.
pub fn score_all(model: &SymptomModel, symptoms: &[String]) -> Result<Vec<Prediction>> {
    if symptoms.is_empty() {
        return Err(Error::NoSymptoms);
    }
    let mut predictions: Vec<Prediction> = model
        .available_diseases()
        .iter()
        .filter_map(|disease| score(model, disease, symptoms).ok())
        .collect();
    predictions.sort_by(|a, b| {
        b.raw_probability
            .partial_cmp(&a.raw_probability)
            .unwrap_or(Ordering::Equal)
    });
    Ok(predictions)
}

/// Symptom weights for a disease with display labels, sorted by
/// descending weight. Used to explain predictions.
pub fn symptom_importance(model: &SymptomModel, disease: &str) -> Result<Vec<(String, f64)>> {
    let weights = model.weights(disease).ok_or_else(|| Error::UnknownDisease {
        name: disease.to_string(),
    })?;
    let mut importance: Vec<(String, f64)> = weights
        .symptoms
        .iter()
        .map(|(key, weight)| (model.display_name(key), *weight))
        .collect();
    importance.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    Ok(importance)
}

/// More matched symptoms and a higher score both raise confidence.
fn confidence(matched: usize, raw_probability: f64) -> f64 {
    let symptom_factor = (matched as f64 / CONFIDENCE_SYMPTOM_NORM).min(1.0);
    symptom_factor * 0.5 + raw_probability * 0.5
}
