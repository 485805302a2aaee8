//! Symptom model: per-disease logistic weights.
//!
//! The model is a table of trained coefficients: each disease has a bias
//! term and one weight per recognized symptom. Scoring (sigmoid of bias +
//! matched weights) lives in dt-core; this module only owns the parameters
//! and their validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// Logistic coefficients for one disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseWeights {
    pub bias: f64,
    pub symptoms: BTreeMap<String, f64>,
}

/// Complete symptom model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomModel {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    pub diseases: BTreeMap<String, DiseaseWeights>,

    /// Human-readable labels for symptom keys.
    #[serde(default)]
    pub display_names: BTreeMap<String, String>,
}

/// Embedded default symptom model JSON for fallback.
const DEFAULT_MODEL_JSON: &str = include_str!("schemas/symptom_model.default.json");

impl SymptomModel {
    /// Load a symptom model from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse_json(&content)
    }

    /// Parse a symptom model from a JSON string and validate it.
    pub fn parse_json(json: &str) -> Result<Self, ValidationError> {
        let model: SymptomModel = serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Semantic validation: compatible schema, finite coefficients, weights
    /// in [0, 1], no disease without symptoms.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !dt_common::schema::is_compatible(&self.schema_version) {
            return Err(ValidationError::SchemaVersion(self.schema_version.clone()));
        }

        for (disease, weights) in &self.diseases {
            if !weights.bias.is_finite() {
                return Err(ValidationError::Semantic(format!(
                    "{}: bias must be finite, got {}",
                    disease, weights.bias
                )));
            }
            if weights.symptoms.is_empty() {
                return Err(ValidationError::Semantic(format!(
                    "{}: no symptom weights defined",
                    disease
                )));
            }
            for (symptom, weight) in &weights.symptoms {
                if weight.is_nan() || !(0.0..=1.0).contains(weight) {
                    return Err(ValidationError::Semantic(format!(
                        "{}: weight for {} must be in [0, 1], got {}",
                        disease, symptom, weight
                    )));
                }
            }
        }
        Ok(())
    }

    /// Modeled disease keys, sorted.
    pub fn available_diseases(&self) -> Vec<&str> {
        self.diseases.keys().map(String::as_str).collect()
    }

    /// Coefficients for one disease, or None if it is not modeled.
    pub fn weights(&self, disease: &str) -> Option<&DiseaseWeights> {
        self.diseases.get(disease)
    }

    /// Display label for a symptom key, falling back to a title-cased key.
    pub fn display_name(&self, symptom: &str) -> String {
        self.display_names
            .get(symptom)
            .cloned()
            .unwrap_or_else(|| title_case(symptom))
    }

    /// Recognized symptoms of a disease with display labels, sorted by key.
    pub fn symptoms_for(&self, disease: &str) -> Option<Vec<(String, String)>> {
        self.weights(disease).map(|w| {
            w.symptoms
                .keys()
                .map(|key| (key.clone(), self.display_name(key)))
                .collect()
        })
    }
}

impl Default for SymptomModel {
    fn default() -> Self {
        // Parse the embedded default model JSON
        // This should never fail since the JSON is embedded at compile time
        Self::parse_json(DEFAULT_MODEL_JSON).expect("Embedded default symptom model JSON is invalid")
    }
}

/// Turn `snake_case` keys into "Snake Case" labels.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_model_json() -> &'static str {
        r#"{
            "schema_version": "1.0.0",
            "diseases": {
                "diabetes": {
                    "bias": -2.5,
                    "symptoms": {"increased_thirst": 0.85, "fatigue": 0.6}
                }
            },
            "display_names": {"increased_thirst": "Increased thirst"}
        }"#
    }

    #[test]
    fn parse_minimal_model() {
        let model = SymptomModel::parse_json(minimal_model_json()).unwrap();
        assert_eq!(model.available_diseases(), vec!["diabetes"]);
        let weights = model.weights("diabetes").unwrap();
        assert!((weights.bias + 2.5).abs() < 1e-12);
        assert_eq!(weights.symptoms.len(), 2);
    }

    #[test]
    fn default_model_loads_and_validates() {
        let model = SymptomModel::default();
        assert!(model.available_diseases().len() >= 4);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn default_model_covers_original_diseases() {
        let model = SymptomModel::default();
        for disease in ["diabetes", "hypertension", "covid19", "heart_disease"] {
            assert!(
                model.weights(disease).is_some(),
                "missing model for {disease}"
            );
        }
    }

    #[test]
    fn display_name_prefers_table() {
        let model = SymptomModel::parse_json(minimal_model_json()).unwrap();
        assert_eq!(model.display_name("increased_thirst"), "Increased thirst");
    }

    #[test]
    fn display_name_falls_back_to_title_case() {
        let model = SymptomModel::parse_json(minimal_model_json()).unwrap();
        assert_eq!(model.display_name("night_sweats"), "Night Sweats");
    }

    #[test]
    fn symptoms_for_unknown_disease_is_none() {
        let model = SymptomModel::parse_json(minimal_model_json()).unwrap();
        assert!(model.symptoms_for("gout").is_none());
    }

    #[test]
    fn rejects_weight_out_of_range() {
        let json = r#"{
            "schema_version": "1.0.0",
            "diseases": {
                "x": {"bias": -1.0, "symptoms": {"fever": 1.2}}
            }
        }"#;
        let err = SymptomModel::parse_json(json).unwrap_err();
        assert!(err.to_string().contains("fever"));
    }

    #[test]
    fn rejects_empty_symptom_table() {
        let json = r#"{
            "schema_version": "1.0.0",
            "diseases": {
                "x": {"bias": -1.0, "symptoms": {}}
            }
        }"#;
        assert!(SymptomModel::parse_json(json).is_err());
    }

    #[test]
    fn title_case_handles_multiword_keys() {
        assert_eq!(title_case("loss_taste_smell"), "Loss Taste Smell");
        assert_eq!(title_case("fever"), "Fever");
        assert_eq!(title_case(""), "");
    }
}
