//! Rule-based condition prediction.
//!
//! A fixed table associates each condition with its characteristic
//! symptoms; a selection is scored by percentage overlap against each
//! rule. This is intentionally not a trained model — the table is the
//! whole predictor.

/// Condition → symptom associations, scanned in order.
///
/// A slice rather than a map: scoring ties keep the first-seen
/// condition, so iteration order is part of the behavior.
const CONDITION_RULES: &[(&str, &[&str])] = &[
    ("Common Cold", &["runny_nose", "sneezing", "cough", "sore_throat"]),
    ("Flu", &["fever", "chills", "muscle_aches", "fatigue", "headache"]),
    ("Gastroenteritis", &["stomach_pain", "nausea", "vomiting", "diarrhoea"]),
    ("Migraine", &["headache", "nausea", "vomiting", "sensitivity_to_light"]),
    ("Hypertension", &["headache", "dizziness", "chest_pain"]),
    (
        "Diabetes",
        &["increased_thirst", "frequent_urination", "fatigue", "blurred_vision"],
    ),
    ("Bronchial Asthma", &["cough", "shortness_of_breath", "wheezing"]),
    ("Malaria", &["fever", "chills", "headache", "nausea", "vomiting"]),
    ("Dengue", &["fever", "headache", "muscle_aches", "nausea", "rash"]),
    ("Pneumonia", &["cough", "fever", "shortness_of_breath", "chest_pain"]),
];

/// Best matches below this overlap percentage are discarded in favor of
/// the fallback.
const SCORE_THRESHOLD: f64 = 20.0;

const FALLBACK_CONDITION: &str = "Common Cold";
const FALLBACK_CONFIDENCE: f64 = 50.0;

/// Result of scoring one symptom selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub condition: String,
    /// Overlap percentage in [0, 100].
    pub confidence: f64,
}

/// Score `selected` against every rule and return the best match, or the
/// fallback when nothing clears the threshold.
///
/// Empty selections are the caller's problem — the HTTP layer rejects
/// them before calling; if one does arrive it lands on the fallback.
pub fn predict(selected: &[String]) -> Prediction {
    let mut best: Option<(&str, f64)> = None;

    for (condition, rule_symptoms) in CONDITION_RULES {
        let matches = rule_symptoms
            .iter()
            .filter(|symptom| selected.iter().any(|s| s == *symptom))
            .count();
        let score = if rule_symptoms.is_empty() {
            0.0
        } else {
            matches as f64 * 100.0 / rule_symptoms.len() as f64
        };
        // Strictly greater: ties keep the earlier condition.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((condition, score));
        }
    }

    match best {
        Some((condition, score)) if score >= SCORE_THRESHOLD => Prediction {
            condition: condition.to_string(),
            confidence: score,
        },
        _ => Prediction {
            condition: FALLBACK_CONDITION.to_string(),
            confidence: FALLBACK_CONFIDENCE,
        },
    }
}
