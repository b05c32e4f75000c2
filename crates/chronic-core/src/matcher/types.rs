use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Labels a user reports having. Duplicates collapse; iteration is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomSelection {
    labels: BTreeSet<String>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label; returns false if it was already selected.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// True if every label in `self` is also in `other`.
    pub fn is_subset(&self, other: &SymptomSelection) -> bool {
        self.labels.is_subset(&other.labels)
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A disease that met its trigger count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub disease: String,
    /// Number of selected labels found in the rule.
    pub matched: usize,
    pub trigger_count: usize,
    /// The selected labels that matched, sorted.
    pub matched_labels: Vec<String>,
    /// e.g. `Potential High Risk (2 matching factors found).`
    pub status: String,
}

impl Finding {
    pub(crate) fn new(
        disease: impl Into<String>,
        matched_labels: Vec<String>,
        trigger_count: usize,
    ) -> Self {
        let matched = matched_labels.len();
        Self {
            disease: disease.into(),
            matched,
            trigger_count,
            matched_labels,
            status: status_line(matched),
        }
    }
}

/// Status text reported for a flagged disease.
pub fn status_line(matched: usize) -> String {
    format!("Potential High Risk ({} matching factors found).", matched)
}

/// Flagged diseases in knowledge-base declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisResult {
    findings: Vec<Finding>,
}

impl DiagnosisResult {
    pub(crate) fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn get(&self, disease: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.disease == disease)
    }

    /// Status string for `disease`, if it was flagged.
    pub fn status(&self, disease: &str) -> Option<&str> {
        self.get(disease).map(|f| f.status.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    /// `(disease, status)` pairs in result order.
    pub fn statuses(&self) -> impl Iterator<Item = (&str, &str)> {
        self.findings
            .iter()
            .map(|f| (f.disease.as_str(), f.status.as_str()))
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl<'a> IntoIterator for &'a DiagnosisResult {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}
