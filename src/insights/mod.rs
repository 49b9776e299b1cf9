// src/insights/mod.rs
//! Rule-based interpretation of questionnaire results.
//!
//! [`interpret`] maps a test type and its raw results to an [`InsightsResult`].
//! It never fails: any problem with the payload is logged and the generic
//! insights are returned instead, so clients always receive every field.

mod branches;
pub mod inputs;
pub mod test_type;

pub use test_type::{catalogue, TestType, TestTypeInfo};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResult {
    pub personality_insights: Vec<String>,
    pub career_recommendations: Vec<String>,
    pub learning_pathways: Vec<String>,
    pub strength_weakness_analysis: Vec<String>,
    pub development_suggestions: Vec<String>,
    pub confidence_score: i64,
}

impl InsightsResult {
    /// The fallback returned for unknown test types and unusable payloads.
    pub fn generic() -> Self {
        branches::generic()
    }
}

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("results must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid results field: {0}")]
    InvalidField(#[source] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Interpret `results` for the questionnaire identified by `test_type`.
pub fn interpret(test_type: &str, results: &Value) -> InsightsResult {
    let kind = TestType::from_key(test_type);
    match try_interpret(kind, results) {
        Ok(insights) => {
            debug!(
                "Interpreted {} results (confidence {})",
                kind, insights.confidence_score
            );
            insights
        }
        Err(e) => {
            error!(
                "Failed to interpret results for test type '{}': {}. Using generic insights",
                test_type, e
            );
            InsightsResult::generic()
        }
    }
}

/// Fallible core of [`interpret`], for callers that want to know why a
/// payload was rejected.
pub fn try_interpret(test_type: TestType, results: &Value) -> Result<InsightsResult, InterpretError> {
    branches::build(test_type, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL_KEYS: [&str; 8] = [
        "emotional",
        "RIASEC",
        "learning_style",
        "multiple_intelligence",
        "career_transition",
        "retirement_readiness",
        "senior_employment",
        "no_diploma_career",
    ];

    fn assert_fully_populated(insights: &InsightsResult) {
        assert!(!insights.personality_insights.is_empty());
        assert!(!insights.career_recommendations.is_empty());
        assert!(!insights.learning_pathways.is_empty());
        assert!(!insights.strength_weakness_analysis.is_empty());
        assert!(!insights.development_suggestions.is_empty());
        assert!(insights.confidence_score > 0);
    }

    #[test]
    fn test_every_type_is_fully_populated() {
        let payloads = [
            json!({}),
            json!({ "actionPriorities": [] }),
            Value::Null,
            json!("garbage"),
        ];
        for key in ALL_KEYS.iter().chain(["", "bogus", "Riasec"].iter()) {
            for payload in &payloads {
                let insights = interpret(key, payload);
                assert_fully_populated(&insights);
                assert_eq!(insights.personality_insights.len(), 2);
                assert_eq!(insights.learning_pathways.len(), 2);
                assert_eq!(insights.strength_weakness_analysis.len(), 2);
                assert_eq!(insights.development_suggestions.len(), 2);
                assert!(insights.strength_weakness_analysis[0].starts_with("Force:"));
                assert!(insights.strength_weakness_analysis[1].starts_with("À améliorer:"));
            }
        }
    }

    #[test]
    fn test_default_confidence_scores() {
        assert_eq!(interpret("emotional", &json!({})).confidence_score, 85);
        assert_eq!(interpret("RIASEC", &json!({})).confidence_score, 80);
        assert_eq!(interpret("learning_style", &json!({})).confidence_score, 90);
        assert_eq!(interpret("multiple_intelligence", &json!({})).confidence_score, 85);
        assert_eq!(interpret("whatever", &json!({})).confidence_score, 75);
    }

    #[test]
    fn test_zero_confidence_falls_back_to_default() {
        let insights = interpret("emotional", &json!({ "confidenceScore": 0 }));
        assert_eq!(insights.confidence_score, 85);
    }

    #[test]
    fn test_riasec_end_to_end() {
        let insights = interpret("RIASEC", &json!({ "confidenceScore": 92 }));
        assert_eq!(
            insights.career_recommendations,
            vec!["Ingénierie", "Artisanat", "Métiers techniques"]
        );
        assert_eq!(insights.confidence_score, 92);
    }

    #[test]
    fn test_unknown_type_returns_generic_text() {
        let insights = interpret("bogus_type", &json!({ "anything": 1, "confidenceScore": 99 }));
        assert_eq!(insights, InsightsResult::generic());
        assert_eq!(
            insights.personality_insights,
            vec![
                "Votre profil présente des caractéristiques intéressantes",
                "Vous disposez d'un potentiel de développement important",
            ]
        );
        assert_eq!(
            insights.career_recommendations,
            vec!["Consultation", "Gestion de projet", "Formation"]
        );
        assert_eq!(insights.confidence_score, 75);
    }

    #[test]
    fn test_malformed_results_fall_back_to_generic() {
        let generic = InsightsResult::generic();
        assert_eq!(interpret("emotional", &Value::Null), generic);
        assert_eq!(interpret("RIASEC", &json!([1, 2, 3])), generic);
        assert_eq!(interpret("RIASEC", &json!({ "confidenceScore": "high" })), generic);
        assert_eq!(interpret("career_transition", &json!({ "adaptability": "yes" })), generic);
        assert_eq!(interpret("retirement_readiness", &json!({})), generic);
        assert_eq!(
            interpret("senior_employment", &json!({ "recommendedRoles": "Formateur" })),
            generic
        );
    }

    #[test]
    fn test_career_transition_satisfaction_boundary() {
        let ready = interpret("career_transition", &json!({ "currentSatisfaction": 49 }));
        assert_eq!(
            ready.personality_insights[0],
            "Vous semblez prêt pour une reconversion professionnelle"
        );

        let hesitant = interpret("career_transition", &json!({ "currentSatisfaction": 50 }));
        assert_eq!(
            hesitant.personality_insights[0],
            "Vous semblez hésitant pour une reconversion professionnelle"
        );
    }

    #[test]
    fn test_career_transition_thresholds_and_defaults() {
        let insights = interpret(
            "career_transition",
            &json!({
                "adaptability": 71,
                "skillTransferability": 80,
                "riskTolerance": 30,
                "confidenceScore": 77
            }),
        );
        assert_eq!(
            insights.personality_insights[1],
            "Votre capacité d'adaptation est excellente"
        );
        assert_eq!(
            insights.strength_weakness_analysis,
            vec![
                "Force: Compétences transférables",
                "À améliorer: Tolérance au risque"
            ]
        );
        assert_eq!(insights.career_recommendations.len(), 3);
        assert_eq!(insights.confidence_score, 77);

        let sparse = interpret("career_transition", &json!({}));
        assert_eq!(
            sparse.personality_insights,
            vec![
                "Vous semblez hésitant pour une reconversion professionnelle",
                "Votre capacité d'adaptation est à développer",
            ]
        );
        assert_eq!(
            sparse.strength_weakness_analysis,
            vec![
                "Force: Capacité d'apprentissage",
                "À améliorer: Planification du changement"
            ]
        );
        assert_eq!(sparse.confidence_score, 80);
    }

    #[test]
    fn test_career_transition_echoes_sanitized_sectors() {
        let insights = interpret(
            "career_transition",
            &json!({ "recommendedSectors": [" Santé ", "", "Éducation"] }),
        );
        assert_eq!(insights.career_recommendations, vec!["Santé", "Éducation"]);

        let empty = interpret("career_transition", &json!({ "recommendedSectors": [] }));
        assert_eq!(
            empty.career_recommendations,
            vec!["Numérique", "Transition écologique", "Services à la personne"]
        );
    }

    #[test]
    fn test_retirement_readiness_action_priorities() {
        let fallback = interpret("retirement_readiness", &json!({ "actionPriorities": [] }));
        assert_eq!(
            fallback.strength_weakness_analysis[1],
            "À améliorer: Planification financière"
        );

        let first = interpret(
            "retirement_readiness",
            &json!({ "actionPriorities": ["Projet de vie", "Santé"], "socialConnections": 90 }),
        );
        assert_eq!(
            first.strength_weakness_analysis,
            vec!["Force: Réseau social solide", "À améliorer: Projet de vie"]
        );
    }

    #[test]
    fn test_retirement_readiness_thresholds() {
        let insights = interpret(
            "retirement_readiness",
            &json!({
                "actionPriorities": [],
                "financialPreparation": 71,
                "purposeClarity": 70
            }),
        );
        assert_eq!(
            insights.personality_insights,
            vec![
                "Votre préparation financière est solide",
                "Votre projet de retraite est encore à préciser",
            ]
        );
        assert_eq!(insights.confidence_score, 85);
    }

    #[test]
    fn test_senior_employment_thresholds() {
        let insights = interpret(
            "senior_employment",
            &json!({
                "experienceValue": 90,
                "technologyAdaptation": 40,
                "mentorshipPotential": 75,
                "flexibilityNeeds": 80,
                "recommendedRoles": ["Coach interne"]
            }),
        );
        assert_eq!(
            insights.personality_insights,
            vec![
                "Votre expérience est fortement valorisée par les recruteurs",
                "Votre aisance avec les outils numériques est à consolider",
            ]
        );
        assert_eq!(
            insights.strength_weakness_analysis,
            vec![
                "Force: Potentiel de mentorat",
                "À améliorer: Équilibre entre flexibilité et exigences du poste",
            ]
        );
        assert_eq!(insights.career_recommendations, vec!["Coach interne"]);

        let sparse = interpret("senior_employment", &json!({}));
        assert_eq!(
            sparse.career_recommendations,
            vec!["Consultant senior", "Formateur", "Tuteur en entreprise"]
        );
    }

    #[test]
    fn test_no_diploma_career_thresholds() {
        let insights = interpret(
            "no_diploma_career",
            &json!({
                "practicalSkills": 85,
                "selfLearningCapacity": 60,
                "entrepreneurialAptitude": 71,
                "experiencePortfolio": 49
            }),
        );
        assert_eq!(
            insights.personality_insights,
            vec![
                "Vos compétences pratiques sont un atout majeur",
                "Votre capacité d'autoformation est à renforcer",
            ]
        );
        assert_eq!(
            insights.strength_weakness_analysis,
            vec![
                "Force: Esprit entrepreneurial",
                "À améliorer: Formalisation de votre expérience",
            ]
        );
        assert_eq!(insights.career_recommendations.len(), 3);

        let portfolio = interpret("no_diploma_career", &json!({ "experiencePortfolio": 50 }));
        assert_eq!(
            portfolio.strength_weakness_analysis[1],
            "À améliorer: Reconnaissance officielle des compétences"
        );
    }

    #[test]
    fn test_try_interpret_reports_reason() {
        let err = try_interpret(TestType::RetirementReadiness, &json!({})).unwrap_err();
        assert!(matches!(err, InterpretError::MissingField("actionPriorities")));
        assert!(try_interpret(TestType::Generic, &Value::Null).is_ok());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(InsightsResult::generic()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "personalityInsights",
            "careerRecommendations",
            "learningPathways",
            "strengthWeaknessAnalysis",
            "developmentSuggestions",
            "confidenceScore",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object["confidenceScore"], json!(75));
    }
}
