//! Final diagnostic report rendering.

use serde::Serialize;

use crate::error::Result;
use crate::matcher::{DiagnosisResult, Finding, SymptomSelection};
use crate::shared::OutputFormat;

/// Printed when intake produced an empty selection; the matcher is not run.
pub const NO_VALID_INPUT: &str = "No valid input received. Exiting.";

const NO_MATCH: &str =
    "No chronic diseases matched the rules. Consider consulting a specialist for a definitive diagnosis.";
const RULE_WIDTH: usize = 50;

#[derive(Serialize)]
struct JsonReport<'a> {
    symptoms_reported: Vec<&'a str>,
    findings: Vec<&'a Finding>,
}

/// Renders the report in the requested format.
pub fn render(
    format: OutputFormat,
    selection: &SymptomSelection,
    result: &DiagnosisResult,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(selection, result)),
        OutputFormat::Json => render_json(selection, result),
    }
}

pub fn render_text(selection: &SymptomSelection, result: &DiagnosisResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let reported: Vec<&str> = selection.iter().collect();

    let mut lines = vec![
        heavy.clone(),
        "FINAL DIAGNOSTIC REPORT".to_string(),
        heavy.clone(),
        format!("Symptoms Reported: {}", reported.join(", ")),
        light,
    ];
    if result.is_empty() {
        lines.push(NO_MATCH.to_string());
    } else {
        lines.push("Potential Chronic Diseases Identified:".to_string());
        lines.extend(
            result
                .statuses()
                .map(|(disease, status)| format!("  - {}: {}", disease, status)),
        );
    }
    lines.push(heavy);
    lines.join("\n")
}

pub fn render_json(selection: &SymptomSelection, result: &DiagnosisResult) -> Result<String> {
    let report = JsonReport {
        symptoms_reported: selection.iter().collect(),
        findings: result.iter().collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;
    use crate::matcher::diagnose;

    fn select(labels: &[&str]) -> SymptomSelection {
        labels.iter().copied().collect()
    }

    #[test]
    fn test_text_report_lists_findings() {
        let kb = KnowledgeBase::builtin();
        let selection = select(&["Frequent Headaches", "Dizziness", "Smoking"]);
        let text = render_text(&selection, &diagnose(&selection, &kb));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(lines[1], "FINAL DIAGNOSTIC REPORT");
        assert_eq!(lines[3], "Symptoms Reported: Dizziness, Frequent Headaches, Smoking");
        assert_eq!(lines[4], "-".repeat(50));
        assert_eq!(lines[5], "Potential Chronic Diseases Identified:");
        assert_eq!(
            lines[6],
            "  - Hypertension (High BP): Potential High Risk (3 matching factors found)."
        );
        assert_eq!(lines.last().copied(), Some("=".repeat(50).as_str()));
    }

    #[test]
    fn test_text_report_without_findings() {
        let kb = KnowledgeBase::builtin();
        let selection = select(&["Wheezing"]);
        let text = render_text(&selection, &diagnose(&selection, &kb));
        assert!(text.contains(NO_MATCH));
        assert!(!text.contains("Potential Chronic Diseases Identified"));
    }

    #[test]
    fn test_json_report_shape() {
        let kb = KnowledgeBase::builtin();
        let selection = select(&["Polyuria (frequent urination)", "Polydipsia (excessive thirst)"]);
        let out = render(OutputFormat::Json, &selection, &diagnose(&selection, &kb)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["symptoms_reported"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["findings"][0]["disease"], "Diabetes");
        assert_eq!(json["findings"][0]["matched"], 2);
        assert_eq!(
            json["findings"][0]["status"],
            "Potential High Risk (2 matching factors found)."
        );
    }
}
