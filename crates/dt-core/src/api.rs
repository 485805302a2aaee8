//! Wire types for the JSON HTTP API.
//!
//! Field names are part of the compatibility contract with existing
//! clients and must not change: camelCase on the probability endpoints'
//! requests, snake_case everywhere else.

use serde::{Deserialize, Serialize};

use dt_math::round_dp;

use crate::predict::{Prediction, SYMPTOM_FALSE_POSITIVE};
use crate::risk::RiskAssessment;

fn default_test_result() -> String {
    "positive".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

// ── Probability endpoints ──────────────────────────────────────────────

/// `POST /preset` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetRequest {
    #[serde(default)]
    pub disease: Option<String>,
}

/// `POST /preset` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetResponse {
    pub prior: f64,
    pub p_d_given_pos: f64,
}

/// `POST /disease` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRequest {
    #[serde(rename = "pD")]
    pub p_d: f64,
    pub sensitivity: f64,
    #[serde(rename = "falsePositive")]
    pub false_positive: f64,
    #[serde(rename = "testResult", default = "default_test_result")]
    pub test_result: String,
}

/// `POST /disease` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseResponse {
    pub test_result: String,
    pub p_d_given_result: f64,
}

/// Error envelope shared by the probability endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ── Recommendations ────────────────────────────────────────────────────

/// `POST /gemini-recommendations` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub disease_name: Option<String>,
    pub prior_probability: f64,
    pub posterior_probability: f64,
    #[serde(default = "default_test_result")]
    pub test_result: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// `POST /gemini-recommendations` response, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub recommendations: String,
}

impl RecommendationResponse {
    pub fn ok(recommendations: String) -> Self {
        RecommendationResponse {
            success: true,
            error: None,
            recommendations,
        }
    }

    pub fn failed(error: String, fallback: &str) -> Self {
        RecommendationResponse {
            success: false,
            error: Some(error),
            recommendations: fallback.to_string(),
        }
    }
}

// ── Symptom prediction endpoints ───────────────────────────────────────

/// `POST /api/ml/predict` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Raw model output section, percentages rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlPrediction {
    pub raw_probability: f64,
    pub confidence_score: f64,
    pub symptoms_analyzed: usize,
}

/// Bayesian update section, percentages rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayesianAnalysis {
    pub prior: f64,
    pub likelihood: f64,
    pub posterior: f64,
    pub false_positive_rate: f64,
}

/// `POST /api/ml/predict` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    pub disease: String,
    pub ml_prediction: MlPrediction,
    pub bayesian_analysis: BayesianAnalysis,
    pub risk_assessment: RiskAssessment,
}

impl PredictResponse {
    /// Build the wire form from a scored prediction and its posterior,
    /// converting to rounded percentages.
    pub fn from_prediction(prediction: &Prediction, posterior: f64) -> Self {
        PredictResponse {
            success: true,
            disease: prediction.display_name.clone(),
            ml_prediction: MlPrediction {
                raw_probability: round_dp(prediction.raw_probability * 100.0, 2),
                confidence_score: round_dp(prediction.confidence_score * 100.0, 2),
                symptoms_analyzed: prediction.symptoms_matched,
            },
            bayesian_analysis: BayesianAnalysis {
                prior: round_dp(prediction.prior_probability * 100.0, 2),
                likelihood: round_dp(prediction.likelihood * 100.0, 2),
                posterior: round_dp(posterior * 100.0, 2),
                false_positive_rate: round_dp(SYMPTOM_FALSE_POSITIVE * 100.0, 2),
            },
            risk_assessment: RiskAssessment::from_percent(posterior * 100.0),
        }
    }
}

/// `POST /api/ml/predict-multiple` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictMultipleRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// One differential-diagnosis row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferentialEntry {
    pub disease: String,
    pub probability: f64,
    pub posterior: f64,
    pub confidence: f64,
    pub risk_level: RiskAssessment,
}

impl DifferentialEntry {
    /// Build one differential row from a scored prediction and its
    /// posterior.
    pub fn from_prediction(prediction: &Prediction, posterior: f64) -> Self {
        DifferentialEntry {
            disease: prediction.display_name.clone(),
            probability: round_dp(prediction.raw_probability * 100.0, 2),
            posterior: round_dp(posterior * 100.0, 2),
            confidence: round_dp(prediction.confidence_score * 100.0, 2),
            risk_level: RiskAssessment::from_percent(posterior * 100.0),
        }
    }
}

/// `POST /api/ml/predict-multiple` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictMultipleResponse {
    pub success: bool,
    pub predictions: Vec<DifferentialEntry>,
    pub symptoms_count: usize,
}

// ── Catalog endpoints ──────────────────────────────────────────────────

/// One modeled disease, key plus display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseListing {
    pub key: String,
    pub name: String,
}

/// `GET /api/ml/diseases` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseasesResponse {
    pub success: bool,
    pub diseases: Vec<DiseaseListing>,
}

/// One recognized symptom, key plus display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomListing {
    pub key: String,
    pub name: String,
}

/// `GET /api/ml/symptoms/<disease>` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomsResponse {
    pub success: bool,
    pub disease: String,
    pub symptoms: Vec<SymptomListing>,
}

/// One symptom weight, as a percentage rounded to 1 decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceEntry {
    pub symptom: String,
    pub importance: f64,
}

/// `GET /api/ml/symptom-importance/<disease>` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportanceResponse {
    pub success: bool,
    pub disease: String,
    pub symptom_importance: Vec<ImportanceEntry>,
}

// ── Service health ─────────────────────────────────────────────────────

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub schema_version: String,
}
