//! # Explanation Store
//!
//! Human-readable formula metadata (name, equation text, description,
//! variables) keyed by language, subject and equation identifier. Lookups are
//! exact-match only; there is no language fallback.
//!
//! ## Sources
//!
//! Records are layered, later sources replacing earlier ones on key clash:
//!
//! 1. English, derived from the [registry](crate::registry)
//! 2. Bundled translations embedded from `data/explanations/*.json`
//! 3. An optional JSON file supplied at startup ([`ExplanationStore::load_from_path`])
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "equation_id": "kinetic-energy",
//!     "name": "Energía cinética",
//!     "equation": "E = 0.5 * m * v^2",
//!     "description": "Energía asociada al movimiento de un cuerpo.",
//!     "variables": [{ "symbol": "m", "description": "Masa", "unit": "kg" }],
//!     "subject": "mechanics",
//!     "topic": "energía",
//!     "language_code": "es"
//!   }
//! ]
//! ```

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{FormulaError, FormulaResult};
use crate::formulas::{all_formulas, Formula};

/// Language of the registry-derived records
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(RustEmbed)]
#[folder = "data/explanations/"]
struct BundledExplanations;

/// One variable of an equation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub symbol: String,
    pub description: String,
    #[serde(default)]
    pub unit: String,
}

/// Full explanation record for one formula in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaDescriptor {
    pub equation_id: String,
    pub name: String,
    pub equation: String,
    pub description: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    pub language_code: String,
}

impl FormulaDescriptor {
    /// English record built from a registry entry
    pub fn from_formula(formula: &Formula) -> Self {
        FormulaDescriptor {
            equation_id: formula.id.to_string(),
            name: formula.name.to_string(),
            equation: formula.equation.to_string(),
            description: formula.description.to_string(),
            variables: formula
                .params
                .iter()
                .map(|param| Variable {
                    symbol: param.key.to_string(),
                    description: param.label.to_string(),
                    unit: param.unit.to_string(),
                })
                .collect(),
            subject: formula.subject.as_str().to_string(),
            topic: formula.topic.to_string(),
            language_code: DEFAULT_LANGUAGE.to_string(),
        }
    }

    fn key(&self) -> RecordKey {
        (
            self.language_code.clone(),
            self.subject.clone(),
            self.equation_id.clone(),
        )
    }

    pub fn summary(&self) -> DescriptorSummary {
        DescriptorSummary {
            equation_id: self.equation_id.clone(),
            name: self.name.clone(),
            subject: self.subject.clone(),
            language_code: self.language_code.clone(),
        }
    }
}

/// Listing entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DescriptorSummary {
    pub subject: String,
    pub equation_id: String,
    pub name: String,
    pub language_code: String,
}

/// (language, subject, equation_id)
type RecordKey = (String, String, String);

/// Immutable-after-startup keyed record store.
#[derive(Debug, Clone, Default)]
pub struct ExplanationStore {
    records: HashMap<RecordKey, FormulaDescriptor>,
}

impl ExplanationStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// English records for every registered formula
    pub fn from_registry() -> Self {
        let mut store = Self::new();
        store.merge(all_formulas().map(FormulaDescriptor::from_formula));
        store
    }

    /// Registry records plus every embedded translation file.
    pub fn bundled() -> FormulaResult<Self> {
        let mut store = Self::from_registry();
        for file_name in BundledExplanations::iter() {
            let file = BundledExplanations::get(&file_name).ok_or_else(|| FormulaError::Internal {
                message: format!("embedded explanation file '{}' vanished", file_name),
            })?;
            let text = std::str::from_utf8(&file.data).map_err(|e| FormulaError::SerializationError {
                reason: format!("{}: {}", file_name, e),
            })?;
            let records = parse_records(text)?;
            debug!(file = %file_name, count = records.len(), "loaded bundled explanations");
            store.merge(records);
        }
        Ok(store)
    }

    /// Insert records, replacing any with the same key. Returns the number inserted.
    pub fn merge<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = FormulaDescriptor>,
    {
        let mut count = 0;
        for record in records {
            self.records.insert(record.key(), record);
            count += 1;
        }
        count
    }

    /// Merge records from a JSON file on disk.
    ///
    /// Returns the number of records read.
    pub fn load_from_path(&mut self, path: &Path) -> FormulaResult<usize> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FormulaError::file_error("read explanations", path.display().to_string(), e.to_string()))?;
        let records = parse_records(&text)?;
        if records.is_empty() {
            warn!(path = %path.display(), "explanation file contains no records");
        }
        Ok(self.merge(records))
    }

    /// Exact-match lookup
    pub fn find(&self, language: &str, subject: &str, equation_id: &str) -> FormulaResult<&FormulaDescriptor> {
        let key = (language.to_string(), subject.to_string(), equation_id.to_string());
        self.records
            .get(&key)
            .ok_or_else(|| FormulaError::ExplanationNotFound {
                subject: subject.to_string(),
                equation_id: equation_id.to_string(),
                language: language.to_string(),
            })
    }

    /// Summaries for one language, sorted by subject then identifier.
    /// An unknown language yields an empty list.
    pub fn list(&self, language: &str) -> Vec<DescriptorSummary> {
        let mut summaries: Vec<_> = self
            .records
            .values()
            .filter(|record| record.language_code == language)
            .map(FormulaDescriptor::summary)
            .collect();
        summaries.sort();
        summaries
    }

    /// Language codes with at least one record
    pub fn languages(&self) -> Vec<String> {
        self.records
            .values()
            .map(|record| record.language_code.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a JSON array of descriptor records.
pub fn parse_records(text: &str) -> FormulaResult<Vec<FormulaDescriptor>> {
    serde_json::from_str(text).map_err(|e| FormulaError::SerializationError { reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::registry;

    fn record(language: &str, equation_id: &str, name: &str) -> FormulaDescriptor {
        FormulaDescriptor {
            equation_id: equation_id.to_string(),
            name: name.to_string(),
            equation: "x = y".to_string(),
            description: "test".to_string(),
            variables: vec![],
            subject: "mechanics".to_string(),
            topic: String::new(),
            language_code: language.to_string(),
        }
    }

    #[test]
    fn test_registry_records_in_english() {
        let store = ExplanationStore::from_registry();
        assert_eq!(store.len(), registry::formula_count());

        let descriptor = store.find("en", "mechanics", "centripetal-acceleration").unwrap();
        assert_eq!(descriptor.name, "Centripetal Acceleration");
        assert_eq!(descriptor.variables.len(), 2);
        assert_eq!(descriptor.variables[1].symbol, "r");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let store = ExplanationStore::from_registry();
        // Right id, wrong subject
        let err = store.find("en", "quantum", "centripetal-acceleration").unwrap_err();
        assert_eq!(err.error_code(), "EXPLANATION_NOT_FOUND");
        // No fallback from an unknown language
        assert!(store.find("de", "mechanics", "centripetal-acceleration").is_err());
    }

    #[test]
    fn test_unknown_language_lists_nothing() {
        let store = ExplanationStore::from_registry();
        assert!(store.list("xx").is_empty());
        assert_eq!(store.list("en").len(), registry::formula_count());
    }

    #[test]
    fn test_list_sorted() {
        let mut store = ExplanationStore::new();
        store.merge(vec![record("es", "weight", "Peso"), record("es", "impulse", "Impulso")]);
        let ids: Vec<_> = store.list("es").into_iter().map(|s| s.equation_id).collect();
        assert_eq!(ids, vec!["impulse", "weight"]);
    }

    #[test]
    fn test_merge_replaces_same_key() {
        let mut store = ExplanationStore::from_registry();
        let before = store.len();
        store.merge(vec![record("en", "weight", "Weight (custom)")]);
        assert_eq!(store.len(), before);
        assert_eq!(store.find("en", "mechanics", "weight").unwrap().name, "Weight (custom)");
    }

    #[test]
    fn test_bundled_translations() {
        let store = ExplanationStore::bundled().unwrap();
        let languages = store.languages();
        assert!(languages.contains(&"en".to_string()));
        assert!(languages.contains(&"es".to_string()));
        assert!(languages.contains(&"fr".to_string()));

        let es = store.find("es", "mechanics", "kinetic-energy").unwrap();
        assert_eq!(es.language_code, "es");
        assert_eq!(es.name, "Energía cinética");
    }

    #[test]
    fn test_bundled_records_reference_registered_formulas() {
        let store = ExplanationStore::bundled().unwrap();
        for language in store.languages() {
            for summary in store.list(&language) {
                let formula = registry::find(&summary.equation_id)
                    .unwrap_or_else(|_| panic!("{} record for unknown formula {}", language, summary.equation_id));
                assert_eq!(formula.subject.as_str(), summary.subject, "{}", summary.equation_id);
            }
        }
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!("formula-explanations-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        let records = vec![record("de", "weight", "Gewichtskraft")];
        file.write_all(serde_json::to_string(&records).unwrap().as_bytes()).unwrap();
        drop(file);

        let mut store = ExplanationStore::new();
        assert_eq!(store.load_from_path(&path).unwrap(), 1);
        assert_eq!(store.find("de", "mechanics", "weight").unwrap().name, "Gewichtskraft");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_errors() {
        let mut store = ExplanationStore::new();
        let err = store.load_from_path(Path::new("/nonexistent/explanations.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let err = parse_records("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
