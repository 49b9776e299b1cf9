// src/insights/test_type.rs
use serde::Serialize;
use std::fmt;

/// Questionnaire families the engine knows how to interpret.
///
/// Anything that does not match one of the wire keys exactly (case-sensitive)
/// is routed to [`TestType::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestType {
    Emotional,
    Riasec,
    LearningStyle,
    MultipleIntelligence,
    CareerTransition,
    RetirementReadiness,
    SeniorEmployment,
    NoDiplomaCareer,
    Generic,
}

impl TestType {
    /// Every recognized test type, in catalogue order. `Generic` is not listed.
    pub const ALL: [TestType; 8] = [
        TestType::Emotional,
        TestType::Riasec,
        TestType::LearningStyle,
        TestType::MultipleIntelligence,
        TestType::CareerTransition,
        TestType::RetirementReadiness,
        TestType::SeniorEmployment,
        TestType::NoDiplomaCareer,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "emotional" => TestType::Emotional,
            "RIASEC" => TestType::Riasec,
            "learning_style" => TestType::LearningStyle,
            "multiple_intelligence" => TestType::MultipleIntelligence,
            "career_transition" => TestType::CareerTransition,
            "retirement_readiness" => TestType::RetirementReadiness,
            "senior_employment" => TestType::SeniorEmployment,
            "no_diploma_career" => TestType::NoDiplomaCareer,
            _ => TestType::Generic,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TestType::Emotional => "emotional",
            TestType::Riasec => "RIASEC",
            TestType::LearningStyle => "learning_style",
            TestType::MultipleIntelligence => "multiple_intelligence",
            TestType::CareerTransition => "career_transition",
            TestType::RetirementReadiness => "retirement_readiness",
            TestType::SeniorEmployment => "senior_employment",
            TestType::NoDiplomaCareer => "no_diploma_career",
            TestType::Generic => "generic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestType::Emotional => "Intelligence émotionnelle",
            TestType::Riasec => "Intérêts professionnels (RIASEC)",
            TestType::LearningStyle => "Style d'apprentissage",
            TestType::MultipleIntelligence => "Intelligences multiples",
            TestType::CareerTransition => "Reconversion professionnelle",
            TestType::RetirementReadiness => "Préparation à la retraite",
            TestType::SeniorEmployment => "Emploi des seniors",
            TestType::NoDiplomaCareer => "Carrière sans diplôme",
            TestType::Generic => "Profil général",
        }
    }

    /// Confidence score reported when the results carry no usable one.
    pub fn default_confidence(&self) -> i64 {
        match self {
            TestType::Emotional => 85,
            TestType::Riasec => 80,
            TestType::LearningStyle => 90,
            TestType::MultipleIntelligence => 85,
            TestType::CareerTransition => 80,
            TestType::RetirementReadiness => 85,
            TestType::SeniorEmployment => 85,
            TestType::NoDiplomaCareer => 80,
            TestType::Generic => 75,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, TestType::Generic)
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Catalogue entry exposed to API and CLI consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestTypeInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub default_confidence_score: i64,
}

impl From<TestType> for TestTypeInfo {
    fn from(test_type: TestType) -> Self {
        Self {
            key: test_type.key(),
            label: test_type.label(),
            default_confidence_score: test_type.default_confidence(),
        }
    }
}

pub fn catalogue() -> Vec<TestTypeInfo> {
    TestType::ALL.into_iter().map(TestTypeInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(TestType::from_key("RIASEC"), TestType::Riasec);
        assert_eq!(TestType::from_key("riasec"), TestType::Generic);
        assert_eq!(TestType::from_key("Emotional"), TestType::Generic);
        assert_eq!(TestType::from_key(""), TestType::Generic);
    }

    #[test]
    fn test_keys_round_trip_for_known_types() {
        for test_type in TestType::ALL {
            assert_eq!(TestType::from_key(test_type.key()), test_type);
            assert!(!test_type.is_generic());
        }
    }

    #[test]
    fn test_catalogue_lists_known_types_only() {
        let entries = catalogue();
        assert_eq!(entries.len(), 8);
        assert!(entries.iter().all(|e| e.key != "generic"));
        assert_eq!(entries[2].key, "learning_style");
        assert_eq!(entries[2].default_confidence_score, 90);
    }
}
