//! Disease rule table (the knowledge base).
//!
//! ## Rule Table
//!
//! | Disease                | Required symptoms                                   | Risk factors                          | Trigger |
//! |------------------------|-----------------------------------------------------|---------------------------------------|---------|
//! | Diabetes               | Polyuria, Polydipsia                                | High BMI, Family History              | 2       |
//! | Hypertension (High BP) | Frequent Headaches, Dizziness, Fatigue              | Smoking, High Sodium Intake           | 2       |
//! | Asthma                 | Wheezing, Shortness of Breath, Coughing             | Allergies, Environmental Pollutants   | 2       |
//!
//! The table above is the built-in source. A TOML rule file can replace it at startup
//! (see [`RuleFile`]); either way the resulting [`KnowledgeBase`] is read-only.

mod builtin;
mod store;

pub use builtin::{chronic_disease_rules, BuiltinRules};
pub use store::{DiseaseRule, KnowledgeBase, RuleFile};

use crate::error::Result;

/// Common trait for anything that can supply disease rules.
pub trait RuleSource {
    /// Human-readable name for this source (used in logs and `--verify`).
    fn name(&self) -> &str;

    /// Produces the rules in declaration order.
    fn rules(&self) -> Result<Vec<DiseaseRule>>;
}
