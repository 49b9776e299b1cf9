// src/insights/branches.rs
//! One builder per test type. Wording is shown verbatim to end users.

use serde_json::Value;

use super::inputs::{
    above, below, parse, resolve_confidence, sanitize_recommendations, CareerTransitionInput,
    NoDiplomaCareerInput, RetirementReadinessInput, SeniorEmploymentInput, StaticInput,
};
use super::{InsightsResult, InterpretError, TestType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pick<'a>(condition: bool, yes: &'a str, no: &'a str) -> &'a str {
    if condition {
        yes
    } else {
        no
    }
}

pub fn build(test_type: TestType, results: &Value) -> Result<InsightsResult, InterpretError> {
    match test_type {
        TestType::Emotional => emotional(results),
        TestType::Riasec => riasec(results),
        TestType::LearningStyle => learning_style(results),
        TestType::MultipleIntelligence => multiple_intelligence(results),
        TestType::CareerTransition => career_transition(results),
        TestType::RetirementReadiness => retirement_readiness(results),
        TestType::SeniorEmployment => senior_employment(results),
        TestType::NoDiplomaCareer => no_diploma_career(results),
        TestType::Generic => Ok(generic()),
    }
}

fn emotional(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: StaticInput = parse(results)?;
    Ok(InsightsResult {
        personality_insights: strings(&[
            "Vous faites preuve d'une bonne conscience de vos émotions",
            "Votre empathie facilite vos relations professionnelles",
        ]),
        career_recommendations: strings(&[
            "Ressources humaines",
            "Accompagnement et coaching",
            "Relation client",
        ]),
        learning_pathways: strings(&[
            "Formation en communication non violente",
            "Atelier de gestion du stress",
        ]),
        strength_weakness_analysis: strings(&[
            "Force: Empathie et écoute active",
            "À améliorer: Régulation émotionnelle en situation de pression",
        ]),
        development_suggestions: strings(&[
            "Pratiquer la pleine conscience au quotidien",
            "Solliciter régulièrement des retours de vos collègues",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::Emotional.default_confidence(),
        ),
    })
}

fn riasec(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: StaticInput = parse(results)?;
    Ok(InsightsResult {
        personality_insights: strings(&[
            "Profil à dominante Réaliste et Investigatrice",
            "Vous appréciez les activités concrètes et l'analyse",
        ]),
        career_recommendations: strings(&["Ingénierie", "Artisanat", "Métiers techniques"]),
        learning_pathways: strings(&[
            "Formations techniques certifiantes",
            "Apprentissage par projets pratiques",
        ]),
        strength_weakness_analysis: strings(&[
            "Force: Sens pratique et rigueur",
            "À améliorer: Aisance dans les activités sociales",
        ]),
        development_suggestions: strings(&[
            "Explorer les métiers à travers des stages d'observation",
            "Rencontrer des professionnels des secteurs techniques",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::Riasec.default_confidence(),
        ),
    })
}

fn learning_style(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: StaticInput = parse(results)?;
    Ok(InsightsResult {
        personality_insights: strings(&[
            "Style d'apprentissage à dominante visuelle",
            "Vous retenez mieux avec des schémas et des supports illustrés",
        ]),
        career_recommendations: strings(&[
            "Design graphique",
            "Architecture",
            "Analyse de données",
        ]),
        learning_pathways: strings(&[
            "Cours en ligne avec supports vidéo",
            "Cartes mentales et synthèses visuelles",
        ]),
        strength_weakness_analysis: strings(&[
            "Force: Mémoire visuelle",
            "À améliorer: Apprentissage à partir de contenus uniquement oraux",
        ]),
        development_suggestions: strings(&[
            "Varier les supports d'apprentissage",
            "Reformuler les contenus sous forme de schémas",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::LearningStyle.default_confidence(),
        ),
    })
}

fn multiple_intelligence(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: StaticInput = parse(results)?;
    Ok(InsightsResult {
        personality_insights: strings(&[
            "Intelligences dominantes: logico-mathématique et interpersonnelle",
            "Vous combinez raisonnement analytique et aisance relationnelle",
        ]),
        career_recommendations: strings(&[
            "Conseil en gestion",
            "Enseignement scientifique",
            "Chef de projet",
        ]),
        learning_pathways: strings(&[
            "Études de cas en groupe",
            "Résolution de problèmes collaboratifs",
        ]),
        strength_weakness_analysis: strings(&[
            "Force: Raisonnement logique",
            "À améliorer: Expression artistique et créative",
        ]),
        development_suggestions: strings(&[
            "Participer à des projets d'équipe pluridisciplinaires",
            "Développer une pratique créative régulière",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::MultipleIntelligence.default_confidence(),
        ),
    })
}

fn career_transition(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: CareerTransitionInput = parse(results)?;

    let readiness = pick(below(input.current_satisfaction, 50.0), "prêt", "hésitant");
    let adaptability = pick(above(input.adaptability, 70.0), "excellente", "à développer");
    let strength = pick(
        above(input.skill_transferability, 70.0),
        "Compétences transférables",
        "Capacité d'apprentissage",
    );
    let improvement = pick(
        below(input.risk_tolerance, 50.0),
        "Tolérance au risque",
        "Planification du changement",
    );

    Ok(InsightsResult {
        personality_insights: vec![
            format!("Vous semblez {} pour une reconversion professionnelle", readiness),
            format!("Votre capacité d'adaptation est {}", adaptability),
        ],
        career_recommendations: sanitize_recommendations(input.recommended_sectors)
            .unwrap_or_else(|| {
                strings(&[
                    "Numérique",
                    "Transition écologique",
                    "Services à la personne",
                ])
            }),
        learning_pathways: strings(&[
            "Bilan de compétences",
            "Formation certifiante dans le secteur visé",
        ]),
        strength_weakness_analysis: vec![
            format!("Force: {}", strength),
            format!("À améliorer: {}", improvement),
        ],
        development_suggestions: strings(&[
            "Réaliser des enquêtes métiers auprès de professionnels",
            "Construire un projet de transition par étapes",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::CareerTransition.default_confidence(),
        ),
    })
}

fn retirement_readiness(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: RetirementReadinessInput = parse(results)?;
    let priorities = input
        .action_priorities
        .ok_or(InterpretError::MissingField("actionPriorities"))?;

    let finances = pick(
        above(input.financial_preparation, 70.0),
        "solide",
        "à renforcer",
    );
    let purpose = pick(
        above(input.purpose_clarity, 70.0),
        "clairement défini",
        "encore à préciser",
    );
    let strength = pick(
        above(input.social_connections, 70.0),
        "Réseau social solide",
        "Autonomie personnelle",
    );
    let improvement = priorities
        .first()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .unwrap_or("Planification financière");

    Ok(InsightsResult {
        personality_insights: vec![
            format!("Votre préparation financière est {}", finances),
            format!("Votre projet de retraite est {}", purpose),
        ],
        career_recommendations: strings(&[
            "Bénévolat associatif",
            "Mentorat",
            "Activité de conseil à temps partiel",
        ]),
        learning_pathways: strings(&[
            "Atelier de préparation à la retraite",
            "Formation en gestion de patrimoine",
        ]),
        strength_weakness_analysis: vec![
            format!("Force: {}", strength),
            format!("À améliorer: {}", improvement),
        ],
        development_suggestions: strings(&[
            "Établir un budget prévisionnel de retraite",
            "Maintenir des activités sociales régulières",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::RetirementReadiness.default_confidence(),
        ),
    })
}

fn senior_employment(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: SeniorEmploymentInput = parse(results)?;

    let experience = pick(
        above(input.experience_value, 70.0),
        "fortement valorisée",
        "à mettre davantage en valeur",
    );
    let digital = pick(
        above(input.technology_adaptation, 70.0),
        "avérée",
        "à consolider",
    );
    let strength = pick(
        above(input.mentorship_potential, 70.0),
        "Potentiel de mentorat",
        "Expérience professionnelle",
    );
    let improvement = pick(
        above(input.flexibility_needs, 70.0),
        "Équilibre entre flexibilité et exigences du poste",
        "Visibilité sur le marché de l'emploi",
    );

    Ok(InsightsResult {
        personality_insights: vec![
            format!("Votre expérience est {} par les recruteurs", experience),
            format!("Votre aisance avec les outils numériques est {}", digital),
        ],
        career_recommendations: sanitize_recommendations(input.recommended_roles)
            .unwrap_or_else(|| {
                strings(&["Consultant senior", "Formateur", "Tuteur en entreprise"])
            }),
        learning_pathways: strings(&[
            "Formation aux outils numériques collaboratifs",
            "Certification en tutorat et transmission des savoirs",
        ]),
        strength_weakness_analysis: vec![
            format!("Force: {}", strength),
            format!("À améliorer: {}", improvement),
        ],
        development_suggestions: strings(&[
            "Valoriser vos réalisations dans un portfolio",
            "Activer votre réseau professionnel",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::SeniorEmployment.default_confidence(),
        ),
    })
}

fn no_diploma_career(results: &Value) -> Result<InsightsResult, InterpretError> {
    let input: NoDiplomaCareerInput = parse(results)?;

    let practical = pick(
        above(input.practical_skills, 70.0),
        "un atout majeur",
        "à développer",
    );
    let self_learning = pick(
        above(input.self_learning_capacity, 70.0),
        "remarquable",
        "à renforcer",
    );
    let strength = pick(
        above(input.entrepreneurial_aptitude, 70.0),
        "Esprit entrepreneurial",
        "Motivation et persévérance",
    );
    let improvement = pick(
        below(input.experience_portfolio, 50.0),
        "Formalisation de votre expérience",
        "Reconnaissance officielle des compétences",
    );

    Ok(InsightsResult {
        personality_insights: vec![
            format!("Vos compétences pratiques sont {}", practical),
            format!("Votre capacité d'autoformation est {}", self_learning),
        ],
        career_recommendations: sanitize_recommendations(input.recommended_paths)
            .unwrap_or_else(|| {
                strings(&[
                    "Apprentissage en alternance",
                    "Validation des acquis de l'expérience",
                    "Création d'entreprise",
                ])
            }),
        learning_pathways: strings(&[
            "Formations courtes qualifiantes",
            "Plateformes d'apprentissage en ligne",
        ]),
        strength_weakness_analysis: vec![
            format!("Force: {}", strength),
            format!("À améliorer: {}", improvement),
        ],
        development_suggestions: strings(&[
            "Constituer un portfolio de réalisations",
            "Se renseigner sur la validation des acquis de l'expérience",
        ]),
        confidence_score: resolve_confidence(
            input.confidence_score,
            TestType::NoDiplomaCareer.default_confidence(),
        ),
    })
}

/// Fallback insights. Also what every failed interpretation degrades to.
pub fn generic() -> InsightsResult {
    InsightsResult {
        personality_insights: strings(&[
            "Votre profil présente des caractéristiques intéressantes",
            "Vous disposez d'un potentiel de développement important",
        ]),
        career_recommendations: strings(&["Consultation", "Gestion de projet", "Formation"]),
        learning_pathways: strings(&["Formation continue", "Développement des compétences"]),
        strength_weakness_analysis: strings(&[
            "Force: Capacité d'adaptation",
            "À améliorer: Spécialisation technique",
        ]),
        development_suggestions: strings(&[
            "Identifier vos domaines d'excellence",
            "Construire un plan de développement personnel",
        ]),
        confidence_score: TestType::Generic.default_confidence(),
    }
}
