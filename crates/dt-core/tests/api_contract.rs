//! Wire-contract tests: exact field names and envelopes per endpoint.
//!
//! Existing clients parse these responses by key, so the key sets are
//! asserted exactly, not just partially.

use serde_json::Value;

use dt_config::{DiseaseRegistry, SymptomModel};
use dt_core::server::{handlers, AppState};

fn state() -> AppState {
    AppState {
        registry: DiseaseRegistry::default(),
        model: SymptomModel::default(),
    }
}

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("response is a JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).expect("response body is JSON")
}

#[test]
fn preset_success_contract() {
    let reply = handlers::preset(&state(), r#"{"disease": "HIV"}"#);
    assert_eq!(reply.status, 200);
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["p_d_given_pos", "prior"]);
    assert!(value["p_d_given_pos"].is_f64() || value["p_d_given_pos"].is_number());
}

#[test]
fn preset_error_contract() {
    let reply = handlers::preset(&state(), r#"{"disease": "unknown disease"}"#);
    assert_eq!(reply.status, 404);
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["error"]);
    assert_eq!(value["error"], "Disease not found");
}

#[test]
fn disease_success_contract() {
    let reply = handlers::disease(
        r#"{"pD": 0.5, "sensitivity": 0.9, "falsePositive": 0.1, "testResult": "negative"}"#,
    );
    assert_eq!(reply.status, 200);
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["p_d_given_result", "test_result"]);
    assert_eq!(value["test_result"], "negative");
    assert_eq!(value["p_d_given_result"], 0.1);
}

#[test]
fn disease_error_contract_keeps_original_messages() {
    let reply = handlers::disease(r#"{"pD": 0.0, "sensitivity": 0.9, "falsePositive": 0.0}"#);
    assert_eq!(reply.status, 400);
    let value = parse(&reply.body);
    assert_eq!(
        value["error"],
        "Calculation error: Division by zero. Please check your input values."
    );

    let reply = handlers::disease(r#"{"pD": 2.0, "sensitivity": 0.9, "falsePositive": 0.1}"#);
    let value = parse(&reply.body);
    assert_eq!(
        value["error"],
        "Prevalence must be between 0 and 1 (inclusive). Got 2."
    );
}

#[test]
fn recommendations_success_contract() {
    let reply = handlers::recommendations(
        r#"{"disease_name": null, "prior_probability": 0.5, "posterior_probability": 0.1,
            "test_result": "negative", "language": "english"}"#,
    );
    assert_eq!(reply.status, 200);
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["recommendations", "success"]);
    assert_eq!(value["success"], true);
}

#[test]
fn recommendations_failure_contract() {
    let reply = handlers::recommendations(
        r#"{"prior_probability": -0.5, "posterior_probability": 0.1}"#,
    );
    assert_eq!(reply.status, 400);
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["error", "recommendations", "success"]);
    assert_eq!(value["success"], false);
}

#[test]
fn predict_success_contract() {
    let reply = handlers::predict(
        &state(),
        r#"{"disease": "diabetes", "symptoms": ["increased_thirst", "fatigue"]}"#,
    );
    assert_eq!(reply.status, 200);
    let value = parse(&reply.body);
    assert_eq!(
        keys(&value),
        vec![
            "bayesian_analysis",
            "disease",
            "ml_prediction",
            "risk_assessment",
            "success"
        ]
    );
    assert_eq!(
        keys(&value["ml_prediction"]),
        vec!["confidence_score", "raw_probability", "symptoms_analyzed"]
    );
    assert_eq!(
        keys(&value["bayesian_analysis"]),
        vec!["false_positive_rate", "likelihood", "posterior", "prior"]
    );
    assert_eq!(
        keys(&value["risk_assessment"]),
        vec!["color", "description", "level"]
    );
}

#[test]
fn predict_multiple_contract() {
    let reply = handlers::predict_multiple(&state(), r#"{"symptoms": ["chest_pain"]}"#);
    assert_eq!(reply.status, 200);
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["predictions", "success", "symptoms_count"]);
    let first = &value["predictions"][0];
    assert_eq!(
        keys(first),
        vec![
            "confidence",
            "disease",
            "posterior",
            "probability",
            "risk_level"
        ]
    );
}

#[test]
fn catalog_contracts() {
    let reply = handlers::diseases(&state());
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["diseases", "success"]);
    assert_eq!(keys(&value["diseases"][0]), vec!["key", "name"]);

    let reply = handlers::symptoms(&state(), "covid19");
    let value = parse(&reply.body);
    assert_eq!(keys(&value), vec!["disease", "success", "symptoms"]);

    let reply = handlers::symptom_importance(&state(), "covid19");
    let value = parse(&reply.body);
    assert_eq!(
        keys(&value),
        vec!["disease", "success", "symptom_importance"]
    );
    assert_eq!(
        keys(&value["symptom_importance"][0]),
        vec!["importance", "symptom"]
    );
}
