use super::{DiseaseRule, RuleSource};
use crate::error::Result;

/// The built-in chronic disease table, in declaration order.
pub fn chronic_disease_rules() -> Vec<DiseaseRule> {
    vec![
        DiseaseRule::new(
            "Diabetes",
            ["Polyuria (frequent urination)", "Polydipsia (excessive thirst)"],
            ["High BMI", "Family History"],
            2,
        ),
        DiseaseRule::new(
            "Hypertension (High BP)",
            ["Frequent Headaches", "Dizziness", "Fatigue"],
            ["Smoking", "High Sodium Intake"],
            2,
        ),
        DiseaseRule::new(
            "Asthma",
            ["Wheezing", "Shortness of Breath", "Coughing"],
            ["Allergies", "Environmental Pollutants"],
            2,
        ),
    ]
}

/// Rule source backed by [`chronic_disease_rules`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRules;

impl RuleSource for BuiltinRules {
    fn name(&self) -> &str {
        "built-in"
    }

    fn rules(&self) -> Result<Vec<DiseaseRule>> {
        Ok(chronic_disease_rules())
    }
}
