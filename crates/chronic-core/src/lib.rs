//! chronic-core: rule-based chronic disease symptom checker.
//!
//! A static table of disease rules, a threshold matcher over selected symptom / risk-factor
//! labels, and the intake and report helpers the console front end is built from.
//! Not a diagnostic tool: matching is plain counting against a fixed table.

mod error;
mod intake;
mod knowledge;
mod matcher;
mod report;
mod shared;

pub use error::{Error, Result};
pub use shared::{CoreConfig, OutputFormat, DEFAULT_APP_NAME};

pub use knowledge::{
    chronic_disease_rules, BuiltinRules, DiseaseRule, KnowledgeBase, RuleFile, RuleSource,
};

pub use matcher::{diagnose, status_line, DiagnosisResult, Finding, SymptomSelection};

pub use intake::{LabelMenu, SELECTION_PROMPT};
pub use report::{render, render_json, render_text, NO_VALID_INPUT};
