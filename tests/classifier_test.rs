//! End-to-end classifier behavior tests.

use std::sync::Arc;

use bayesic::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use bayesic::classifier::{MultiLabelBayes, SingleLabelBayes};
use bayesic::error::Result;
use bayesic::filter::{AboveMeanFilter, ThresholdFilter, TopKFilter};

#[test]
fn test_single_label_end_to_end() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;
    classifier.train("cat", "animal")?;
    classifier.train("dog", "animal")?;
    classifier.train("car", "vehicle")?;

    assert_eq!(classifier.predict("cat")?, Some("animal".to_string()));

    let probabilities = classifier.probabilities("cat")?;
    assert_eq!(probabilities.len(), 2);

    let sum: f64 = probabilities.iter().map(|p| p.decimal()).sum();
    assert!((sum - 1.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_probabilities_sum_to_one_across_category_counts() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;

    for (index, sample) in [
        "the quick brown fox",
        "jumped over the lazy dog",
        "pack my box with five dozen jugs",
        "sphinx of black quartz judge my vow",
        "how vexingly quick daft zebras jump",
    ]
    .iter()
    .enumerate()
    {
        classifier.train(sample, &format!("category-{index}"))?;

        let probabilities = classifier.probabilities("quick zebras in a box")?;
        assert_eq!(probabilities.len(), index + 1);

        let sum: f64 = probabilities.iter().map(|p| p.decimal()).sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum {sum} for {} categories", index + 1);
    }

    Ok(())
}

#[test]
fn test_untrained_classifier_has_no_opinion() -> Result<()> {
    let classifier = SingleLabelBayes::new()?;
    assert!(classifier.probabilities("whatever")?.is_empty());
    assert_eq!(classifier.predict("whatever")?, None);

    let multi = MultiLabelBayes::new()?;
    assert!(multi.probabilities("whatever")?.is_empty());
    assert!(multi.predict("whatever", &TopKFilter::new(5))?.is_empty());

    Ok(())
}

#[test]
fn test_multi_label_trains_all_labels_from_one_document() -> Result<()> {
    let mut classifier = MultiLabelBayes::new()?;
    classifier.train("wearable tracks heart rate", &["technology", "health"])?;

    let state = classifier.engine().state();
    assert_eq!(state.total_documents(), 1);

    let technology = state.get("technology").unwrap();
    let health = state.get("health").unwrap();
    assert_eq!(technology.doc_count(), 1);
    assert_eq!(health.doc_count(), 1);
    assert_eq!(technology.word_frequency(), health.word_frequency());

    Ok(())
}

#[test]
fn test_multi_label_predict_with_filters() -> Result<()> {
    let mut classifier = MultiLabelBayes::new()?;
    classifier.train("rust compiler borrow checker", &["programming"])?;
    classifier.train("sourdough starter hydration", &["baking"])?;
    classifier.train("ergonomic keyboard wrist rest", &["programming", "health"])?;

    let top = classifier.predict("borrow checker errors", &TopKFilter::new(2))?;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].category(), "programming");

    let above_mean = classifier.predict("borrow checker errors", &AboveMeanFilter)?;
    assert!(above_mean.iter().any(|p| p.category() == "programming"));
    assert!(above_mean.len() < 3);

    let confident = classifier.predict("borrow checker errors", &ThresholdFilter::new(0.5))?;
    for p in &confident {
        assert!(p.decimal() >= 0.5);
    }

    Ok(())
}

#[test]
fn test_empty_text_falls_back_to_priors() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;
    classifier.train("cat", "animal")?;
    classifier.train("dog", "animal")?;
    classifier.train("car", "vehicle")?;

    // No likelihood terms, so the larger prior wins.
    assert_eq!(classifier.predict("")?, Some("animal".to_string()));
    assert_eq!(classifier.predict("12345 !!!")?, Some("animal".to_string()));

    Ok(())
}

#[test]
fn test_custom_tokenizer_is_respected() -> Result<()> {
    let mut classifier = SingleLabelBayes::with_tokenizer(Arc::new(WhitespaceTokenizer::new()));
    classifier.train("ERROR-42 disk", "alert")?;

    // The whitespace tokenizer keeps case and punctuation.
    let category = classifier.engine().state().get("alert").unwrap();
    assert_eq!(category.token_frequency("ERROR-42"), 1);
    assert_eq!(category.token_frequency("error"), 0);

    Ok(())
}

#[test]
fn test_reset_clears_everything() -> Result<()> {
    let mut classifier = MultiLabelBayes::new()?;
    classifier.train("some sample", &["a", "b"])?;
    classifier.reset();

    assert_eq!(classifier.engine().state().total_documents(), 0);
    assert_eq!(classifier.engine().vocabulary().size(), 0);
    assert_eq!(classifier.engine().state().len(), 0);

    Ok(())
}

#[test]
fn test_training_stats_from_classifier() -> Result<()> {
    let mut classifier = SingleLabelBayes::new()?;
    classifier.train("spam spam spam eggs", "spam")?;
    classifier.train("fine ham", "ham")?;

    let stats = classifier.training_stats();
    assert_eq!(stats.total_documents(), 2);
    assert_eq!(stats.num_categories(), 2);
    assert!((stats.class_balance_ratio() - 1.0).abs() < 1e-9);

    assert_eq!(classifier.top_tokens("spam", 1), vec![("spam".to_string(), 3)]);
    assert_eq!(classifier.most_common_tokens(1), vec![("spam".to_string(), 3)]);

    Ok(())
}
