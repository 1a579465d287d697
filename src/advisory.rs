//! Advisory bundle assembly: everything the reference data knows about
//! one condition, gathered for a response.

use serde::Serialize;

use crate::dataset::Dataset;

/// Combined advisory text for one condition. Serialized as the `info`
/// object of the JSON prediction response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdvisoryBundle {
    pub description: String,
    pub medications: Vec<String>,
    pub diet: Vec<String>,
    pub precautions: Vec<String>,
    pub workouts: Vec<String>,
}

/// Look up the advisory bundle for `condition`.
///
/// Total over arbitrary names: each field independently defaults to
/// empty when the condition is missing from its table.
pub fn assemble_info(dataset: &Dataset, condition: &str) -> AdvisoryBundle {
    AdvisoryBundle {
        description: dataset
            .description(condition)
            .unwrap_or_default()
            .to_string(),
        medications: dataset
            .medications(condition)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        diet: dataset
            .diet(condition)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        precautions: dataset
            .precautions(condition)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
        workouts: dataset
            .workouts(condition)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_condition_fills_every_field() {
        let dataset = Dataset::fixture();
        let info = assemble_info(&dataset, "Common Cold");
        assert!(!info.description.is_empty());
        assert_eq!(info.medications, ["Decongestants", "Antihistamines"]);
        assert_eq!(info.diet, ["Warm fluids", "Vitamin C rich fruits"]);
        assert_eq!(info.precautions.len(), 2);
        assert_eq!(info.workouts, ["Rest"]);
    }

    #[test]
    fn unknown_condition_yields_empty_bundle() {
        let dataset = Dataset::fixture();
        let info = assemble_info(&dataset, "Definitely Not A Disease");
        assert_eq!(info, AdvisoryBundle::default());
    }

    #[test]
    fn serializes_with_the_expected_field_names() {
        let dataset = Dataset::fixture();
        let info = assemble_info(&dataset, "Common Cold");
        let json = serde_json::to_value(&info).unwrap();
        for field in ["description", "medications", "diet", "precautions", "workouts"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
