//! Export/import contract tests.

use std::fs;

use bayesic::classifier::{MultiLabelBayes, SingleLabelBayes};
use bayesic::error::{BayesicError, Result};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn test_export_import_round_trip_preserves_state() -> Result<()> {
    let mut original = SingleLabelBayes::new()?;
    original.train("amazing, awesome movie!! Yeah!! Oh boy.", "positive")?;
    original.train("dreadful and boring", "negative")?;
    original.train("what a great soundtrack", "positive")?;

    let exported = original.export()?;

    let mut restored = SingleLabelBayes::new()?;
    restored.import(&exported)?;

    let original_state: Value = serde_json::from_str(&exported).unwrap();
    let restored_state: Value = serde_json::from_str(&restored.export()?).unwrap();
    assert_eq!(original_state, restored_state);

    // The restored classifier behaves like the original.
    assert_eq!(restored.predict("awesome movie")?, Some("positive".to_string()));
    assert_eq!(restored.predict("boring")?, Some("negative".to_string()));

    Ok(())
}

#[test]
fn test_round_trip_keeps_category_order() -> Result<()> {
    let mut original = MultiLabelBayes::new()?;
    original.train("zulu", &["zebra"])?;
    original.train("alpha", &["apple"])?;
    original.train("mike", &["mango"])?;

    let exported = original.export()?;
    let mut restored = MultiLabelBayes::new()?;
    restored.import(&exported)?;

    let document: Value = serde_json::from_str(&restored.export()?).unwrap();
    assert_eq!(
        document["categories"],
        serde_json::json!(["zebra", "apple", "mango"])
    );

    Ok(())
}

#[test]
fn test_exported_document_field_names() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;
    classifier.train("one two", "numbers")?;

    let document: Value = serde_json::from_str(&classifier.export()?).unwrap();
    let root = document.as_object().unwrap();

    for field in [
        "categories",
        "totalDocuments",
        "vocabulary",
        "vocabularySize",
        "categoriesState",
    ] {
        assert!(root.contains_key(field), "missing field {field}");
    }

    let category = document["categoriesState"]["numbers"].as_object().unwrap();
    for field in ["docCount", "wordCount", "wordFrequencyCount"] {
        assert!(category.contains_key(field), "missing field {field}");
    }

    Ok(())
}

#[test]
fn test_import_missing_mandatory_fields_is_corrupted_state() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;

    for payload in [
        "{}",
        r#"{"vocabulary": []}"#,
        r#"{"totalDocuments": 1}"#,
        r#"{"totalDocuments": 1, "vocabulary": "not an array"}"#,
        "not json at all",
    ] {
        let result = classifier.import(payload);
        assert!(
            matches!(result, Err(BayesicError::CorruptedState(_))),
            "payload {payload:?} should fail"
        );
    }

    Ok(())
}

#[test]
fn test_import_skips_integer_keyed_category_bodies() -> Result<()> {
    // JSON object keys are strings; a non-object category body is the
    // malformed shape that must be skipped without failing the import.
    let payload = r#"{
        "totalDocuments": 2,
        "vocabulary": ["a", "b"],
        "categoriesState": {
            "kept": {"docCount": 2, "wordCount": 2, "wordFrequencyCount": {"a": 1, "b": 1}},
            "dropped": 17
        }
    }"#;

    let mut classifier = SingleLabelBayes::new()?;
    classifier.import(payload)?;

    let state = classifier.engine().state();
    assert!(state.get("kept").is_some());
    assert!(state.get("dropped").is_none());

    Ok(())
}

#[test]
fn test_import_is_not_additive_for_counters() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;
    classifier.train("hello world", "greeting")?;
    let exported = classifier.export()?;

    // Importing over existing training overwrites the counters.
    classifier.import(&exported)?;
    classifier.import(&exported)?;

    let state = classifier.engine().state();
    assert_eq!(state.total_documents(), 1);
    assert_eq!(state.get("greeting").unwrap().doc_count(), 1);
    assert_eq!(state.get("greeting").unwrap().word_count(), 2);

    Ok(())
}

#[test]
fn test_round_trip_through_a_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("classifier_state.json");

    let mut original = MultiLabelBayes::new()?;
    original.train("solar panels cut energy bills", &["energy", "finance"])?;
    original.train("central bank raises rates", &["finance"])?;

    fs::write(&path, original.export()?).unwrap();

    let mut restored = MultiLabelBayes::new()?;
    restored.import(&fs::read_to_string(&path).unwrap())?;

    let original_state: Value = serde_json::from_str(&original.export()?).unwrap();
    let restored_state: Value = serde_json::from_str(&restored.export()?).unwrap();
    assert_eq!(original_state, restored_state);

    Ok(())
}

#[test]
fn test_tokenizer_is_not_serialized() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;
    classifier.train("hello", "greeting")?;

    let document: Value = serde_json::from_str(&classifier.export()?).unwrap();
    assert!(document.get("tokenizer").is_none());

    Ok(())
}
