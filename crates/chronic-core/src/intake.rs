//! Label menu and index-list parsing for console intake.

use crate::knowledge::KnowledgeBase;
use crate::matcher::SymptomSelection;

/// Prompt shown after the menu.
pub const SELECTION_PROMPT: &str =
    "Enter the numbers corresponding to the symptoms you have (e.g., 1, 3, 5): ";

/// Every known label, sorted, numbered from 1 for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMenu {
    labels: Vec<String>,
}

impl LabelMenu {
    pub fn new(kb: &KnowledgeBase) -> Self {
        Self {
            labels: kb.all_labels().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at 1-based `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Menu lines, `[1] Allergies` style.
    pub fn render(&self) -> Vec<String> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| format!("[{}] {}", i + 1, label))
            .collect()
    }

    /// Parses comma-separated 1-based indices into a selection.
    ///
    /// Blank pieces are skipped. Non-numeric and out-of-range pieces are dropped silently;
    /// they never reject the rest of the input.
    pub fn parse_selection(&self, input: &str) -> SymptomSelection {
        let mut selection = SymptomSelection::new();
        for piece in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let index = match piece.parse::<usize>() {
                Ok(index) => index,
                Err(e) => {
                    tracing::debug!(
                        target: "chronic::intake",
                        entry = piece,
                        "Ignoring non-numeric entry '{}': {}",
                        piece,
                        e
                    );
                    continue;
                }
            };
            match self.label(index) {
                Some(label) => {
                    selection.insert(label);
                }
                None => tracing::debug!(
                    target: "chronic::intake",
                    entry = index,
                    max = self.len(),
                    "Ignoring index {} outside 1..={}",
                    index,
                    self.len()
                ),
            }
        }
        tracing::debug!(
            target: "chronic::intake",
            selected = selection.len(),
            "Selection parsed"
        );
        selection
    }
}
