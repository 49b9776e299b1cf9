// src/insights/inputs.rs
//! Per-test-type views over the raw `results` payload.
//!
//! Every field is optional. A missing or `null` score makes its threshold
//! comparison false, so the "otherwise" wording is picked.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::InterpretError;

pub const MAX_RECOMMENDATIONS: usize = 10;
pub const MAX_RECOMMENDATION_CHARS: usize = 120;

/// Shared by the static branches: only the confidence score is read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticInput {
    pub confidence_score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTransitionInput {
    pub confidence_score: Option<f64>,
    pub current_satisfaction: Option<f64>,
    pub adaptability: Option<f64>,
    pub skill_transferability: Option<f64>,
    pub risk_tolerance: Option<f64>,
    pub recommended_sectors: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementReadinessInput {
    pub confidence_score: Option<f64>,
    pub financial_preparation: Option<f64>,
    pub purpose_clarity: Option<f64>,
    pub social_connections: Option<f64>,
    /// Required: indexing an absent list is a failure, an empty one is not.
    pub action_priorities: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeniorEmploymentInput {
    pub confidence_score: Option<f64>,
    pub experience_value: Option<f64>,
    pub technology_adaptation: Option<f64>,
    pub mentorship_potential: Option<f64>,
    pub flexibility_needs: Option<f64>,
    pub recommended_roles: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoDiplomaCareerInput {
    pub confidence_score: Option<f64>,
    pub practical_skills: Option<f64>,
    pub self_learning_capacity: Option<f64>,
    pub entrepreneurial_aptitude: Option<f64>,
    pub experience_portfolio: Option<f64>,
    pub recommended_paths: Option<Vec<String>>,
}

/// Deserialize `results` into a branch schema. Anything but a JSON object is rejected.
pub fn parse<T: DeserializeOwned>(results: &Value) -> Result<T, InterpretError> {
    if !results.is_object() {
        return Err(InterpretError::NotAnObject(json_kind(results)));
    }
    T::deserialize(results).map_err(InterpretError::InvalidField)
}

/// Confidence falls back to `default` unless the score is truthy.
///
/// `0` counts as absent. That mirrors the historical behaviour clients rely
/// on and is kept deliberately even though a zero score can never surface.
pub fn resolve_confidence(raw: Option<f64>, default: i64) -> i64 {
    match raw {
        Some(score) if score != 0.0 && !score.is_nan() => score.round() as i64,
        _ => default,
    }
}

pub fn above(score: Option<f64>, cut: f64) -> bool {
    score.is_some_and(|s| s > cut)
}

pub fn below(score: Option<f64>, cut: f64) -> bool {
    score.is_some_and(|s| s < cut)
}

/// Clean a caller-provided recommendation list before echoing it back.
///
/// Returns `None` when nothing usable survives so the caller picks its default.
pub fn sanitize_recommendations(list: Option<Vec<String>>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = list?
        .into_iter()
        .map(|entry| {
            entry
                .chars()
                .filter(|c| !c.is_control())
                .collect::<String>()
                .trim()
                .chars()
                .take(MAX_RECOMMENDATION_CHARS)
                .collect::<String>()
        })
        .map(|entry| entry.trim_end().to_string())
        .filter(|entry| !entry.is_empty())
        .take(MAX_RECOMMENDATIONS)
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
