//! Export/import of the classifier training state.
//!
//! The serialized document shape is a compatibility surface shared with other
//! implementations; its field names (`categories`, `totalDocuments`,
//! `vocabulary`, `vocabularySize`, `categoriesState` with per-category
//! `docCount` / `wordCount` / `wordFrequencyCount`) must not change.
//!
//! Import is a strict decode pipeline for the mandatory fields
//! (`totalDocuments`, `vocabulary`) and best-effort for the rest: malformed
//! optional entries are skipped silently so a partially damaged payload still
//! restores whatever is well-formed.

use ahash::AHashMap;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::classifier::engine::BayesEngine;
use crate::error::{BayesicError, Result};

/// The complete serializable training state of a classifier.
///
/// Contains everything needed to reconstruct an equivalent classifier except
/// the tokenizer, which is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierState {
    /// Category names in first-seen order.
    pub categories: Vec<String>,
    /// Total number of trained documents.
    pub total_documents: u64,
    /// Vocabulary tokens in insertion order.
    pub vocabulary: Vec<String>,
    /// Number of unique vocabulary tokens.
    pub vocabulary_size: usize,
    /// Per-category counters, keyed by category name in first-seen order.
    pub categories_state: Map<String, Value>,
}

/// Build the structured state document from an engine.
pub(crate) fn state_document(engine: &BayesEngine) -> ClassifierState {
    let state = engine.state();

    let mut categories_state = Map::new();
    for (name, category) in state.categories() {
        let mut word_frequency_count = Map::new();
        for (token, frequency) in category.word_frequency() {
            word_frequency_count.insert(token.clone(), json!(frequency));
        }

        categories_state.insert(
            name.to_string(),
            json!({
                "docCount": category.doc_count(),
                "wordCount": category.word_count(),
                "wordFrequencyCount": word_frequency_count,
            }),
        );
    }

    ClassifierState {
        categories: state.categories().map(|(name, _)| name.to_string()).collect(),
        total_documents: state.total_documents(),
        vocabulary: engine.vocabulary().tokens().to_vec(),
        vocabulary_size: engine.vocabulary().size(),
        categories_state,
    }
}

/// Encode the engine's training state as a JSON string.
pub(crate) fn export(engine: &BayesEngine) -> Result<String> {
    Ok(serde_json::to_string(&state_document(engine))?)
}

/// Decode a JSON state document into the engine.
///
/// The decoders run in a fixed order: total documents, vocabulary, then
/// categories. A failure in a later decoder leaves earlier-applied fields
/// mutated; the pipeline is not transactional.
pub(crate) fn import(engine: &mut BayesEngine, content: &str) -> Result<()> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| BayesicError::corrupted_state(format!("unparseable document: {e}")))?;

    let Some(document) = document.as_object() else {
        return Err(BayesicError::corrupted_state("document root is not an object"));
    };

    decode_total_documents(engine, document)?;
    decode_vocabulary(engine, document)?;
    decode_categories(engine, document);

    Ok(())
}

fn decode_total_documents(engine: &mut BayesEngine, document: &Map<String, Value>) -> Result<()> {
    let total_documents = document
        .get("totalDocuments")
        .and_then(coerce_count)
        .ok_or_else(|| BayesicError::corrupted_state("missing or non-numeric totalDocuments"))?;

    engine.state_mut().set_total_documents(total_documents);

    Ok(())
}

fn decode_vocabulary(engine: &mut BayesEngine, document: &Map<String, Value>) -> Result<()> {
    let tokens = document
        .get("vocabulary")
        .and_then(Value::as_array)
        .ok_or_else(|| BayesicError::corrupted_state("missing or non-array vocabulary"))?;

    // Non-string entries are skipped, not an error.
    for token in tokens.iter().filter_map(Value::as_str) {
        engine.vocabulary_mut().add(token);
    }

    Ok(())
}

fn decode_categories(engine: &mut BayesEngine, document: &Map<String, Value>) {
    let Some(categories_state) = document.get("categoriesState").and_then(Value::as_object) else {
        return;
    };

    for (name, body) in categories_state {
        // Non-object category bodies are skipped, not an error.
        let Some(body) = body.as_object() else {
            continue;
        };

        let doc_count = body.get("docCount").and_then(coerce_count).unwrap_or(0);
        let word_count = body.get("wordCount").and_then(coerce_count).unwrap_or(0);

        let mut word_frequency = AHashMap::new();
        if let Some(frequencies) = body.get("wordFrequencyCount").and_then(Value::as_object) {
            for (token, frequency) in frequencies {
                // Only numeric frequency values survive.
                if let Some(frequency) = coerce_count(frequency) {
                    word_frequency.insert(token.clone(), frequency);
                }
            }
        }

        let category = engine.state_mut().category(name);
        category.set_doc_count(doc_count);
        category.set_word_count(word_count);
        category.set_word_frequency(word_frequency);
    }
}

/// Coerce a JSON value into a non-negative count.
///
/// Accepts unsigned integers directly and truncates finite non-negative
/// floats; everything else is rejected.
fn coerce_count(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }

    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f as u64)
}
