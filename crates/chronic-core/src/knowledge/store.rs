//! In-memory rule table keyed by disease name.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use super::{chronic_disease_rules, BuiltinRules, RuleSource};
use crate::error::{Error, Result};
use crate::shared::CoreConfig;

/// One disease entry: which labels count toward it and how many are needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRule {
    /// Disease name; unique within a [`KnowledgeBase`].
    pub name: String,
    /// Symptom labels, in declaration order.
    #[serde(default)]
    pub required_symptoms: Vec<String>,
    /// Risk factor labels, in declaration order.
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Minimum number of matching labels (symptoms and risk factors alike) to flag the disease.
    pub trigger_count: usize,
}

impl DiseaseRule {
    pub fn new<S, R>(
        name: impl Into<String>,
        required_symptoms: S,
        risk_factors: R,
        trigger_count: usize,
    ) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.into(),
            required_symptoms: required_symptoms.into_iter().map(Into::into).collect(),
            risk_factors: risk_factors.into_iter().map(Into::into).collect(),
            trigger_count,
        }
    }

    /// All labels of this rule: required symptoms first, then risk factors.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.required_symptoms
            .iter()
            .chain(self.risk_factors.iter())
            .map(String::as_str)
    }

    /// True if `label` is one of this rule's symptoms or risk factors.
    pub fn covers(&self, label: &str) -> bool {
        self.labels().any(|l| l == label)
    }

    /// Number of distinct labels; the highest count a selection can reach for this rule.
    pub fn distinct_label_count(&self) -> usize {
        self.labels().collect::<BTreeSet<_>>().len()
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidRule {
            disease: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("disease name is empty".to_string()));
        }
        if self.trigger_count == 0 {
            return Err(invalid("trigger_count must be at least 1".to_string()));
        }
        let reachable = self.distinct_label_count();
        if self.trigger_count > reachable {
            return Err(invalid(format!(
                "trigger_count {} exceeds the {} distinct labels it can match",
                self.trigger_count, reachable
            )));
        }
        Ok(())
    }
}

/// Immutable disease rule table. Built once at startup, then only queried.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    rules: Vec<DiseaseRule>,
    index: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// Validates `rules` and builds the table, preserving declaration order.
    pub fn new(rules: Vec<DiseaseRule>) -> Result<Self> {
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            rule.validate()?;
            if index.insert(rule.name.clone(), i).is_some() {
                return Err(Error::DuplicateDisease(rule.name.clone()));
            }
        }
        Ok(Self { rules, index })
    }

    /// The built-in chronic disease table.
    pub fn builtin() -> Self {
        let rules = chronic_disease_rules();
        let index = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.name.clone(), i))
            .collect();
        Self { rules, index }
    }

    /// Loads the rule file at `path` (TOML, `[[diseases]]` entries).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_source(&RuleFile::new(path))
    }

    /// Builds the table from any [`RuleSource`].
    pub fn from_source(source: &dyn RuleSource) -> Result<Self> {
        let kb = Self::new(source.rules()?)?;
        tracing::info!(
            target: "chronic::knowledge",
            source = source.name(),
            diseases = kb.len(),
            labels = kb.all_labels().len(),
            "Knowledge base loaded from {} ({} diseases)",
            source.name(),
            kb.len()
        );
        Ok(kb)
    }

    /// Rule file from `config.rules_path` when set, otherwise the built-in table.
    pub fn load(config: &CoreConfig) -> Result<Self> {
        match config.rules_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Self::from_path(path),
            _ => Self::from_source(&BuiltinRules),
        }
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DiseaseRule> {
        self.rules.iter()
    }

    pub fn get(&self, disease: &str) -> Option<&DiseaseRule> {
        self.index.get(disease).map(|&i| &self.rules[i])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sorted, de-duplicated union of every label across all rules.
    pub fn all_labels(&self) -> Vec<&str> {
        self.rules
            .iter()
            .flat_map(DiseaseRule::labels)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(Deserialize)]
struct RuleTable {
    #[serde(default)]
    diseases: Vec<DiseaseRule>,
}

/// Rule source backed by a TOML file on disk.
#[derive(Debug, Clone)]
pub struct RuleFile {
    path: PathBuf,
    name: String,
}

impl RuleFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl RuleSource for RuleFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn rules(&self) -> Result<Vec<DiseaseRule>> {
        let built = config::Config::builder()
            .add_source(config::File::new(&self.name, config::FileFormat::Toml).required(true))
            .build()?;
        let table: RuleTable = built.try_deserialize()?;
        tracing::debug!(
            target: "chronic::knowledge",
            path = %self.path.display(),
            diseases = table.diseases.len(),
            "Rule file parsed"
        );
        Ok(table.diseases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rule_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_table_keeps_declaration_order() {
        let kb = KnowledgeBase::builtin();
        let names: Vec<&str> = kb.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Diabetes", "Hypertension (High BP)", "Asthma"]);
        assert!(kb.iter().all(|r| r.trigger_count == 2));
    }

    #[test]
    fn test_builtin_table_passes_validation() {
        let validated = KnowledgeBase::new(chronic_disease_rules()).unwrap();
        assert_eq!(validated.len(), KnowledgeBase::builtin().len());
        assert_eq!(BuiltinRules.rules().unwrap(), chronic_disease_rules());
    }

    #[test]
    fn test_get_by_disease_name() {
        let kb = KnowledgeBase::builtin();
        let asthma = kb.get("Asthma").unwrap();
        assert_eq!(asthma.required_symptoms, vec!["Wheezing", "Shortness of Breath", "Coughing"]);
        assert_eq!(asthma.risk_factors, vec!["Allergies", "Environmental Pollutants"]);
        assert!(kb.get("Gout").is_none());
    }

    #[test]
    fn test_all_labels_sorted_and_deduplicated() {
        let kb = KnowledgeBase::new(vec![
            DiseaseRule::new("A", ["Fatigue", "Cough"], ["Smoking"], 1),
            DiseaseRule::new("B", ["Fatigue"], ["Age"], 1),
        ])
        .unwrap();
        assert_eq!(kb.all_labels(), vec!["Age", "Cough", "Fatigue", "Smoking"]);

        let builtin = KnowledgeBase::builtin();
        let labels = builtin.all_labels();
        assert_eq!(labels.len(), 14);
        assert_eq!(labels.first(), Some(&"Allergies"));
        assert_eq!(labels.last(), Some(&"Wheezing"));
    }

    #[test]
    fn test_trigger_above_reachable_labels_is_rejected() {
        let err = KnowledgeBase::new(vec![DiseaseRule::new(
            "Gout",
            ["Joint Pain"],
            ["Joint Pain"],
            2,
        )])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRule { ref disease, .. } if disease == "Gout"));
    }

    #[test]
    fn test_zero_trigger_and_empty_name_are_rejected() {
        let no_risk = Vec::<String>::new;
        assert!(matches!(
            KnowledgeBase::new(vec![DiseaseRule::new("Gout", ["Joint Pain"], no_risk(), 0)]),
            Err(Error::InvalidRule { .. })
        ));
        assert!(matches!(
            KnowledgeBase::new(vec![DiseaseRule::new("  ", ["Joint Pain"], no_risk(), 1)]),
            Err(Error::InvalidRule { .. })
        ));
    }

    #[test]
    fn test_duplicate_disease_is_rejected() {
        let err = KnowledgeBase::new(vec![
            DiseaseRule::new("Asthma", ["Wheezing"], ["Allergies"], 1),
            DiseaseRule::new("Asthma", ["Coughing"], ["Allergies"], 1),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateDisease(ref name) if name == "Asthma"));
    }

    #[test]
    fn test_rule_file_is_loaded_in_order() {
        let file = rule_file(
            r#"
[[diseases]]
name = "Gout"
required_symptoms = ["Joint Pain", "Swelling"]
risk_factors = ["High Purine Diet"]
trigger_count = 2

[[diseases]]
name = "Anemia"
required_symptoms = ["Fatigue", "Pale Skin"]
trigger_count = 1
"#,
        );
        let kb = KnowledgeBase::from_path(file.path()).unwrap();
        let names: Vec<&str> = kb.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gout", "Anemia"]);
        assert!(kb.get("Anemia").unwrap().risk_factors.is_empty());
        assert_eq!(kb.get("Gout").unwrap().trigger_count, 2);
    }

    #[test]
    fn test_example_rule_file_matches_builtin_table() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/rules.example.toml");
        let kb = KnowledgeBase::from_path(path).unwrap();
        let rules: Vec<DiseaseRule> = kb.iter().cloned().collect();
        assert_eq!(rules, chronic_disease_rules());
    }

    #[test]
    fn test_rule_file_is_validated() {
        let file = rule_file(
            r#"
[[diseases]]
name = "Gout"
required_symptoms = ["Joint Pain"]
trigger_count = 3
"#,
        );
        assert!(matches!(
            KnowledgeBase::from_path(file.path()),
            Err(Error::InvalidRule { .. })
        ));
    }

    #[test]
    fn test_missing_rule_file_is_a_config_error() {
        let err = KnowledgeBase::from_path("./no/such/rules.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_uses_builtin_without_rules_path() {
        let kb = KnowledgeBase::load(&CoreConfig::default()).unwrap();
        assert_eq!(kb.len(), 3);

        let file = rule_file(
            "[[diseases]]\nname = \"Gout\"\nrequired_symptoms = [\"Joint Pain\"]\ntrigger_count = 1\n",
        );
        let config = CoreConfig {
            rules_path: Some(file.path().display().to_string()),
            ..CoreConfig::default()
        };
        let kb = KnowledgeBase::load(&config).unwrap();
        assert_eq!(kb.len(), 1);
        assert!(kb.get("Gout").is_some());
    }
}
