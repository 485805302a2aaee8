//! Endpoint handlers.
//!
//! Each handler parses its wire request, runs the engine, and maps errors
//! onto the documented envelopes: `{error}` for the probability and
//! symptom endpoints, `{success, error, recommendations}` for the
//! recommendation endpoint. Handlers never panic.

use serde::Serialize;

use dt_common::Error;
use dt_config::model::title_case;
use dt_math::round_dp;

use crate::api::{
    DifferentialEntry, DiseaseListing, DiseaseRequest, DiseaseResponse, DiseasesResponse,
    ErrorResponse, HealthResponse, ImportanceEntry, ImportanceResponse, PredictMultipleRequest,
    PredictMultipleResponse, PredictRequest, PredictResponse, PresetRequest, PresetResponse,
    RecommendationRequest, RecommendationResponse, SymptomListing, SymptomsResponse,
};
use crate::inference::{compute_posterior, resolve_preset, DiagnosticQuery, TestOutcome};
use crate::predict;
use crate::recommend::{self, Language, RecommendationInput};
use crate::server::routes::Reply;
use crate::server::AppState;

const DIVISION_BY_ZERO: &str =
    "Calculation error: Division by zero. Please check your input values.";
const RECOMMENDATION_FALLBACK: &str =
    "Unable to generate recommendations. Please check your inputs.";

fn json<T: Serialize>(status: u16, payload: &T) -> Reply {
    match serde_json::to_string(payload) {
        Ok(body) => Reply { status, body },
        Err(err) => Reply {
            status: 500,
            body: serde_json::json!({ "error": format!("serialization failure: {err}") })
                .to_string(),
        },
    }
}

fn error_reply(status: u16, message: impl Into<String>) -> Reply {
    json(
        status,
        &ErrorResponse {
            error: message.into(),
        },
    )
}

// ── Probability endpoints ──────────────────────────────────────────────

pub fn preset(state: &AppState, body: &str) -> Reply {
    let request: PresetRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(err) => return error_reply(400, format!("Invalid JSON: {err}")),
    };

    let name = match request.disease.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return error_reply(400, "Disease name is required"),
    };

    let query = match resolve_preset(&state.registry, name) {
        Ok(query) => query,
        Err(Error::UnknownDisease { .. }) => return error_reply(404, "Disease not found"),
        Err(err) => return error_reply(500, err.to_string()),
    };

    match compute_posterior(&query) {
        Ok(outcome) => json(
            200,
            &PresetResponse {
                prior: outcome.prior,
                p_d_given_pos: round_dp(outcome.posterior, 4),
            },
        ),
        Err(Error::DegenerateDenominator) => error_reply(400, DIVISION_BY_ZERO),
        Err(err) => error_reply(400, err.to_string()),
    }
}

pub fn disease(body: &str) -> Reply {
    let request: DiseaseRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(err) => return error_reply(400, format!("Invalid JSON: {err}")),
    };

    let outcome = match TestOutcome::parse(&request.test_result) {
        Ok(outcome) => outcome,
        Err(err) => return error_reply(400, err.to_string()),
    };

    let query = DiagnosticQuery {
        prior: request.p_d,
        sensitivity: request.sensitivity,
        false_positive: request.false_positive,
        outcome,
    };

    match compute_posterior(&query) {
        Ok(result) => json(
            200,
            &DiseaseResponse {
                test_result: result.outcome.to_string(),
                p_d_given_result: round_dp(result.posterior, 4),
            },
        ),
        Err(Error::DegenerateDenominator) => error_reply(400, DIVISION_BY_ZERO),
        Err(err) => error_reply(400, err.to_string()),
    }
}

// ── Recommendations ────────────────────────────────────────────────────

pub fn recommendations(body: &str) -> Reply {
    let request: RecommendationRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(err) => {
            return json(
                400,
                &RecommendationResponse::failed(
                    format!("Invalid input: {err}"),
                    RECOMMENDATION_FALLBACK,
                ),
            )
        }
    };

    let outcome = match TestOutcome::parse(&request.test_result) {
        Ok(outcome) => outcome,
        Err(err) => {
            return json(
                400,
                &RecommendationResponse::failed(
                    format!("Invalid input: {err}"),
                    RECOMMENDATION_FALLBACK,
                ),
            )
        }
    };

    let input = RecommendationInput {
        disease_name: request.disease_name.clone(),
        prior: request.prior_probability,
        posterior: request.posterior_probability,
        outcome,
        language: Language::parse(&request.language),
    };

    match recommend::generate(&input) {
        Ok(text) => json(200, &RecommendationResponse::ok(text)),
        Err(err) => json(
            400,
            &RecommendationResponse::failed(
                format!("Invalid input: {err}"),
                RECOMMENDATION_FALLBACK,
            ),
        ),
    }
}

// ── Symptom prediction endpoints ───────────────────────────────────────

pub fn predict(state: &AppState, body: &str) -> Reply {
    let request: PredictRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(err) => return error_reply(400, format!("Invalid JSON: {err}")),
    };

    let disease = match request.disease.as_deref() {
        Some(d) if !d.trim().is_empty() => d,
        _ => return error_reply(400, "Disease not specified"),
    };
    if request.symptoms.is_empty() {
        return error_reply(400, "No symptoms provided");
    }

    let prediction = match predict::score(&state.model, disease, &request.symptoms) {
        Ok(prediction) => prediction,
        Err(Error::UnknownDisease { name }) => {
            return error_reply(400, format!("Disease '{name}' not found in model"))
        }
        Err(err) => return error_reply(400, err.to_string()),
    };

    let posterior = match predict::bayesian_posterior(&prediction) {
        Ok(posterior) => posterior,
        Err(err) => return error_reply(500, format!("Prediction failed: {err}")),
    };

    json(200, &PredictResponse::from_prediction(&prediction, posterior))
}

pub fn predict_multiple(state: &AppState, body: &str) -> Reply {
    let request: PredictMultipleRequest = match serde_json::from_str(body) {
        Ok(req) => req,
        Err(err) => return error_reply(400, format!("Invalid JSON: {err}")),
    };
    if request.symptoms.is_empty() {
        return error_reply(400, "No symptoms provided");
    }

    let predictions = match predict::score_all(&state.model, &request.symptoms) {
        Ok(predictions) => predictions,
        Err(err) => return error_reply(400, err.to_string()),
    };

    let mut entries = Vec::with_capacity(predictions.len());
    for prediction in &predictions {
        let posterior = match predict::bayesian_posterior(prediction) {
            Ok(posterior) => posterior,
            Err(err) => return error_reply(500, format!("Prediction failed: {err}")),
        };
        entries.push(DifferentialEntry::from_prediction(prediction, posterior));
    }

    json(
        200,
        &PredictMultipleResponse {
            success: true,
            predictions: entries,
            symptoms_count: request.symptoms.len(),
        },
    )
}

// ── Catalog endpoints ──────────────────────────────────────────────────

pub fn diseases(state: &AppState) -> Reply {
    let diseases = state
        .model
        .available_diseases()
        .into_iter()
        .map(|key| DiseaseListing {
            key: key.to_string(),
            name: title_case(key),
        })
        .collect();
    json(
        200,
        &DiseasesResponse {
            success: true,
            diseases,
        },
    )
}

pub fn symptoms(state: &AppState, disease: &str) -> Reply {
    match state.model.symptoms_for(disease) {
        Some(symptoms) => json(
            200,
            &SymptomsResponse {
                success: true,
                disease: title_case(disease),
                symptoms: symptoms
                    .into_iter()
                    .map(|(key, name)| SymptomListing { key, name })
                    .collect(),
            },
        ),
        None => error_reply(404, format!("Disease '{disease}' not found in model")),
    }
}

pub fn symptom_importance(state: &AppState, disease: &str) -> Reply {
    match predict::symptom_importance(&state.model, disease) {
        Ok(importance) => json(
            200,
            &ImportanceResponse {
                success: true,
                disease: title_case(disease),
                symptom_importance: importance
                    .into_iter()
                    .map(|(symptom, weight)| ImportanceEntry {
                        symptom,
                        importance: round_dp(weight * 100.0, 1),
                    })
                    .collect(),
            },
        ),
        Err(Error::UnknownDisease { name }) => {
            error_reply(404, format!("Disease '{name}' not found in model"))
        }
        Err(err) => error_reply(500, err.to_string()),
    }
}

// ── Service plumbing ───────────────────────────────────────────────────

pub fn health() -> Reply {
    json(
        200,
        &HealthResponse {
            status: "ok".to_string(),
            schema_version: dt_common::SCHEMA_VERSION.to_string(),
        },
    )
}

pub fn not_found() -> Reply {
    error_reply(404, "Not found")
}

/// Transport failures are reported distinctly from computation errors.
pub fn transport_error(err: &std::io::Error) -> Reply {
    error_reply(400, format!("Failed to read request body: {err}"))
}
