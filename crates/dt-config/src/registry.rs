//! Disease registry: named presets with test operating characteristics.
//!
//! Each entry pairs a disease with its population prevalence (the Bayesian
//! prior) and the sensitivity / false-positive rate of its standard
//! screening test. Lookups are case-insensitive.

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// One registry row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseEntry {
    pub name: String,
    pub prevalence: f64,
    pub sensitivity: f64,
    pub false_positive: f64,

    #[serde(rename = "_comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Complete disease registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRegistry {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    pub diseases: Vec<DiseaseEntry>,
}

/// Embedded default registry JSON for fallback.
const DEFAULT_REGISTRY_JSON: &str = include_str!("schemas/registry.default.json");

impl DiseaseRegistry {
    /// Load a registry from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse_json(&content)
    }

    /// Parse a registry from a JSON string and validate it.
    pub fn parse_json(json: &str) -> Result<Self, ValidationError> {
        let registry: DiseaseRegistry = serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Semantic validation: compatible schema, sane probabilities, no
    /// duplicate names.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !dt_common::schema::is_compatible(&self.schema_version) {
            return Err(ValidationError::SchemaVersion(self.schema_version.clone()));
        }

        let mut seen = std::collections::BTreeSet::new();
        for entry in &self.diseases {
            if entry.name.trim().is_empty() {
                return Err(ValidationError::Semantic(
                    "disease entry with empty name".to_string(),
                ));
            }
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(ValidationError::Semantic(format!(
                    "duplicate disease entry: {}",
                    entry.name
                )));
            }
            for (field, value) in [
                ("prevalence", entry.prevalence),
                ("sensitivity", entry.sensitivity),
                ("false_positive", entry.false_positive),
            ] {
                if value.is_nan() || !(0.0..=1.0).contains(&value) {
                    return Err(ValidationError::Semantic(format!(
                        "{}: {} must be in [0, 1], got {}",
                        entry.name, field, value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Case-insensitive lookup by disease name.
    pub fn lookup(&self, name: &str) -> Option<&DiseaseEntry> {
        let wanted = name.to_lowercase();
        self.diseases
            .iter()
            .find(|entry| entry.name.to_lowercase() == wanted)
    }

    /// Registry disease names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.diseases.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

impl Default for DiseaseRegistry {
    fn default() -> Self {
        // Parse the embedded default registry JSON
        // This should never fail since the JSON is embedded at compile time
        Self::parse_json(DEFAULT_REGISTRY_JSON).expect("Embedded default registry JSON is invalid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_registry_json() -> &'static str {
        r#"{
            "schema_version": "1.0.0",
            "diseases": [
                {"name": "Influenza", "prevalence": 0.05, "sensitivity": 0.9, "false_positive": 0.1},
                {"name": "Lyme Disease", "prevalence": 0.001, "sensitivity": 0.87, "false_positive": 0.028}
            ]
        }"#
    }

    #[test]
    fn parse_minimal_registry() {
        let registry = DiseaseRegistry::parse_json(minimal_registry_json()).unwrap();
        assert_eq!(registry.schema_version, "1.0.0");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn default_registry_loads_and_validates() {
        let registry = DiseaseRegistry::default();
        assert!(!registry.is_empty());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = DiseaseRegistry::parse_json(minimal_registry_json()).unwrap();
        let entry = registry.lookup("influenza").unwrap();
        assert_eq!(entry.name, "Influenza");
        assert!((entry.prevalence - 0.05).abs() < 1e-12);

        assert!(registry.lookup("LYME DISEASE").is_some());
    }

    #[test]
    fn lookup_unknown_is_none() {
        let registry = DiseaseRegistry::parse_json(minimal_registry_json()).unwrap();
        assert!(registry.lookup("dragon pox").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn names_preserve_file_order() {
        let registry = DiseaseRegistry::parse_json(minimal_registry_json()).unwrap();
        assert_eq!(registry.names(), vec!["Influenza", "Lyme Disease"]);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let json = r#"{
            "schema_version": "1.0.0",
            "diseases": [
                {"name": "Bad", "prevalence": 1.5, "sensitivity": 0.9, "false_positive": 0.1}
            ]
        }"#;
        let err = DiseaseRegistry::parse_json(json).unwrap_err();
        assert!(err.to_string().contains("prevalence"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let json = r#"{
            "schema_version": "1.0.0",
            "diseases": [
                {"name": "Flu", "prevalence": 0.05, "sensitivity": 0.9, "false_positive": 0.1},
                {"name": "flu", "prevalence": 0.04, "sensitivity": 0.8, "false_positive": 0.2}
            ]
        }"#;
        let err = DiseaseRegistry::parse_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_incompatible_schema() {
        let json = r#"{"schema_version": "2.0.0", "diseases": []}"#;
        assert!(matches!(
            DiseaseRegistry::parse_json(json),
            Err(ValidationError::SchemaVersion(_))
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(DiseaseRegistry::parse_json("{not valid json}").is_err());
    }

    #[test]
    fn from_file_nonexistent() {
        let result = DiseaseRegistry::from_file(std::path::Path::new("/nonexistent/registry.json"));
        assert!(matches!(result, Err(ValidationError::IoError(_))));
    }

    #[test]
    fn serde_roundtrip() {
        let registry = DiseaseRegistry::parse_json(minimal_registry_json()).unwrap();
        let json = serde_json::to_string(&registry).unwrap();
        let back = DiseaseRegistry::parse_json(&json).unwrap();
        assert_eq!(back.diseases, registry.diseases);
    }
}
