use std::collections::HashMap;
use std::sync::Arc;

use crate::model::document::AnswerDocument;

/// Case-folds an utterance into its lookup key.
pub fn fold(utterance: &str) -> String {
    utterance.to_lowercase()
}

/// Flattened view of an [`AnswerDocument`]: case-folded utterance → the
/// answers of its category. Utterances from one category share a single
/// answers allocation. Built fully before being published, so the client
/// can swap it in with one assignment.
#[derive(Debug, Default)]
pub struct LookupTable {
    entries: HashMap<String, Arc<Vec<String>>>,
}

impl LookupTable {
    pub fn from_document(doc: &AnswerDocument) -> Self {
        let mut entries: HashMap<String, Arc<Vec<String>>> = HashMap::new();

        for category in &doc.data {
            let answers = Arc::new(category.answers.clone());
            for utterance in &category.utterances {
                // Duplicate keys: last write wins, no merging.
                entries.insert(fold(utterance), Arc::clone(&answers));
            }
        }

        LookupTable { entries }
    }

    pub fn get(&self, utterance: &str) -> Option<&Arc<Vec<String>>> {
        self.entries.get(&fold(utterance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> AnswerDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn keys_are_case_folded_on_insert_and_lookup() {
        let table = LookupTable::from_document(&doc(
            r#"{"data":[{"answers":["yo"],"utterances":["Hello"]}]}"#,
        ));

        for variant in ["hello", "Hello", "HELLO", "hElLo"] {
            let answers = table.get(variant).expect(variant);
            assert_eq!(answers.as_slice(), ["yo"]);
        }
    }

    #[test]
    fn category_utterances_share_one_answers_allocation() {
        let table = LookupTable::from_document(&doc(
            r#"{"data":[{"answers":["yo"],"utterances":["hi","hey"]}]}"#,
        ));

        let a = table.get("hi").unwrap();
        let b = table.get("hey").unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn duplicate_utterance_keeps_last_category() {
        let table = LookupTable::from_document(&doc(
            r#"{"data":[
                {"answers":["first"],"utterances":["hi"]},
                {"answers":["second"],"utterances":["HI"]}
            ]}"#,
        ));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("hi").unwrap().as_slice(), ["second"]);
    }

    #[test]
    fn missing_utterance_is_none() {
        let table = LookupTable::from_document(&doc(r#"{"data":[]}"#));
        assert!(table.get("anything").is_none());
        assert!(table.is_empty());
    }
}
