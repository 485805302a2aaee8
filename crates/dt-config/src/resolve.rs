//! Config resolution: explicit path → env var → XDG data dir → embedded.
//!
//! The engine must always start, so the embedded defaults are the final
//! fallback rather than an error.

use std::path::PathBuf;

use crate::model::SymptomModel;
use crate::registry::DiseaseRegistry;
use crate::validate::ValidationError;

/// Environment variable naming an alternate registry file.
pub const REGISTRY_ENV: &str = "DT_REGISTRY";

/// Environment variable naming an alternate symptom model file.
pub const MODEL_ENV: &str = "DT_SYMPTOM_MODEL";

const APP_DIR: &str = "diagnostic-triage";
const REGISTRY_FILE: &str = "registry.json";
const MODEL_FILE: &str = "symptom_model.json";

/// Explicit config file paths, usually from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub registry: Option<PathBuf>,
    pub model: Option<PathBuf>,
}

/// Resolve and load the disease registry.
///
/// An explicitly named file that fails to load is an error; the silent
/// fallback chain applies only to the implicit locations.
pub fn resolve_registry(paths: &ConfigPaths) -> Result<DiseaseRegistry, ValidationError> {
    if let Some(path) = &paths.registry {
        return DiseaseRegistry::from_file(path);
    }
    if let Some(path) = env_path(REGISTRY_ENV) {
        return DiseaseRegistry::from_file(&path);
    }
    if let Some(path) = xdg_path(REGISTRY_FILE) {
        if path.exists() {
            return DiseaseRegistry::from_file(&path);
        }
    }
    Ok(DiseaseRegistry::default())
}

/// Resolve and load the symptom model. Same precedence as the registry.
pub fn resolve_model(paths: &ConfigPaths) -> Result<SymptomModel, ValidationError> {
    if let Some(path) = &paths.model {
        return SymptomModel::from_file(path);
    }
    if let Some(path) = env_path(MODEL_ENV) {
        return SymptomModel::from_file(&path);
    }
    if let Some(path) = xdg_path(MODEL_FILE) {
        if path.exists() {
            return SymptomModel::from_file(&path);
        }
    }
    Ok(SymptomModel::default())
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn xdg_path(file: &str) -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR).join(file))
}
