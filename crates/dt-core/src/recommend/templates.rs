//! Per-language recommendation templates.
//!
//! Phrasing is fixed per (language, risk band) pair so output is fully
//! deterministic and testable. Percentages are formatted with one decimal.

use crate::inference::TestOutcome;
use crate::recommend::{Language, RecommendationInput};
use crate::risk::RiskLevel;

struct Phrases {
    assessment_header: &'static str,
    next_steps_header: &'static str,
    condition_fallback: &'static str,
    positive: &'static str,
    negative: &'static str,
    summary: &'static str,
    low_advice: [&'static str; 3],
    moderate_advice: [&'static str; 3],
    high_advice: [&'static str; 3],
    disclaimer: &'static str,
}

const ENGLISH: Phrases = Phrases {
    assessment_header: "Assessment",
    next_steps_header: "Next steps",
    condition_fallback: "the condition",
    positive: "positive",
    negative: "negative",
    summary: "Given a {test} test result, the probability of {disease} moved from {prior} (pre-test) to {posterior}.",
    low_advice: [
        "The updated probability is low. Routine monitoring of symptoms is usually sufficient.",
        "Keep a record of any new or worsening symptoms.",
        "Repeat testing is generally only useful if symptoms change.",
    ],
    moderate_advice: [
        "The updated probability is moderate and does not rule the condition in or out.",
        "A confirmatory test with different operating characteristics is the most informative next step.",
        "Discuss the result with a clinician before drawing conclusions.",
    ],
    high_advice: [
        "The updated probability is high.",
        "Seek a medical consultation promptly to confirm the result and plan care.",
        "Bring this probability summary to the appointment; the pre-test and post-test values are both relevant.",
    ],
    disclaimer: "This summary is generated from statistical inputs only and is not a diagnosis.",
};

const SPANISH: Phrases = Phrases {
    assessment_header: "Evaluación",
    next_steps_header: "Próximos pasos",
    condition_fallback: "la condición",
    positive: "positivo",
    negative: "negativo",
    summary: "Dado un resultado {test} de la prueba, la probabilidad de {disease} pasó de {prior} (antes de la prueba) a {posterior}.",
    low_advice: [
        "La probabilidad actualizada es baja. Normalmente basta con vigilar los síntomas.",
        "Registre cualquier síntoma nuevo o que empeore.",
        "Repetir la prueba solo suele ser útil si los síntomas cambian.",
    ],
    moderate_advice: [
        "La probabilidad actualizada es moderada y no confirma ni descarta la condición.",
        "Una prueba confirmatoria con características distintas es el siguiente paso más informativo.",
        "Consulte el resultado con un profesional antes de sacar conclusiones.",
    ],
    high_advice: [
        "La probabilidad actualizada es alta.",
        "Busque una consulta médica pronto para confirmar el resultado y planificar la atención.",
        "Lleve este resumen a la cita; los valores previos y posteriores a la prueba son relevantes.",
    ],
    disclaimer: "Este resumen se genera solo a partir de datos estadísticos y no constituye un diagnóstico.",
};

const FRENCH: Phrases = Phrases {
    assessment_header: "Évaluation",
    next_steps_header: "Étapes suivantes",
    condition_fallback: "la condition",
    positive: "positif",
    negative: "négatif",
    summary: "Avec un résultat de test {test}, la probabilité de {disease} est passée de {prior} (avant le test) à {posterior}.",
    low_advice: [
        "La probabilité mise à jour est faible. Une simple surveillance des symptômes suffit généralement.",
        "Notez tout symptôme nouveau ou qui s'aggrave.",
        "Refaire le test n'est utile que si les symptômes évoluent.",
    ],
    moderate_advice: [
        "La probabilité mise à jour est modérée et ne permet pas de conclure.",
        "Un test de confirmation aux caractéristiques différentes est l'étape la plus informative.",
        "Discutez du résultat avec un clinicien avant toute conclusion.",
    ],
    high_advice: [
        "La probabilité mise à jour est élevée.",
        "Consultez rapidement un médecin pour confirmer le résultat et organiser la prise en charge.",
        "Apportez ce résumé au rendez-vous ; les valeurs avant et après test sont toutes deux utiles.",
    ],
    disclaimer: "Ce résumé est produit à partir de données statistiques uniquement et ne constitue pas un diagnostic.",
};

fn phrases(language: Language) -> &'static Phrases {
    match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
        Language::French => &FRENCH,
    }
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Render the markdown recommendation body.
pub fn render(input: &RecommendationInput, risk: RiskLevel) -> String {
    let p = phrases(input.language);

    let disease = input
        .disease_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(p.condition_fallback);
    let test_word = match input.outcome {
        TestOutcome::Positive => p.positive,
        TestOutcome::Negative => p.negative,
    };
    let summary = p
        .summary
        .replace("{test}", test_word)
        .replace("{disease}", disease)
        .replace("{prior}", &percent(input.prior))
        .replace("{posterior}", &percent(input.posterior));

    let advice = match risk {
        RiskLevel::Low => &p.low_advice,
        RiskLevel::Moderate => &p.moderate_advice,
        RiskLevel::High => &p.high_advice,
    };

    let mut out = String::new();
    out.push_str(&format!("**{}**\n\n", p.assessment_header));
    out.push_str(&summary);
    out.push_str("\n\n");
    out.push_str(&format!("**{}**\n\n", p.next_steps_header));
    for line in advice {
        out.push_str(&format!("- {}\n", line));
    }
    out.push('\n');
    out.push_str(&format!("_{}_\n", p.disclaimer));
    out
}
