//! Threshold matcher: selected labels against the disease rule table.

mod types;

pub use types::{status_line, DiagnosisResult, Finding, SymptomSelection};

use crate::knowledge::KnowledgeBase;

/// Flags every disease whose rule shares at least `trigger_count` labels with `selection`.
///
/// Required symptoms and risk factors count the same. Each selected label counts once per
/// disease, and labels no rule knows about are ignored. Findings come back in the
/// knowledge base's declaration order. An empty selection yields an empty result.
pub fn diagnose(selection: &SymptomSelection, kb: &KnowledgeBase) -> DiagnosisResult {
    let mut result = DiagnosisResult::default();

    for rule in kb.iter() {
        let matched_labels: Vec<String> = selection
            .iter()
            .filter(|label| rule.covers(label))
            .map(str::to_string)
            .collect();
        let flagged = matched_labels.len() >= rule.trigger_count;

        tracing::debug!(
            target: "chronic::matcher",
            disease = %rule.name,
            matched = matched_labels.len(),
            trigger_count = rule.trigger_count,
            flagged,
            "Rule evaluated"
        );

        if flagged {
            result.push(Finding::new(rule.name.clone(), matched_labels, rule.trigger_count));
        }
    }

    result
}
