//! Overall training state: categories plus the global document counter.

use ahash::AHashMap;

use crate::classification::category::Category;

/// The complete mutable training state of a classifier.
///
/// Categories are keyed by name and enumerated in first-seen order. A
/// category referenced by name is created lazily with zero counts.
///
/// `total_documents` is expected to stay at or above every category's
/// document count; the classifier keeps them consistent by incrementing the
/// total exactly once per training call regardless of label count. The state
/// itself does not enforce this.
#[derive(Debug, Clone, Default)]
pub struct TrainingState {
    /// Categories keyed by name.
    categories: AHashMap<String, Category>,
    /// Category names in first-seen order.
    order: Vec<String>,
    total_documents: u64,
}

impl TrainingState {
    /// Create a new empty training state.
    pub fn new() -> Self {
        TrainingState::default()
    }

    /// Get a category by name, creating it with zero counts if absent.
    pub fn category(&mut self, name: &str) -> &mut Category {
        if !self.categories.contains_key(name) {
            self.categories.insert(name.to_string(), Category::new());
            self.order.push(name.to_string());
        }

        self.categories
            .get_mut(name)
            .expect("category was just inserted")
    }

    /// Look up a category by name without creating it.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Increment the total number of trained documents by one.
    pub fn increment_total_documents(&mut self) {
        self.total_documents += 1;
    }

    /// Get the total number of documents trained across all categories.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Set the total document count (deserialization path).
    pub fn set_total_documents(&mut self, total_documents: u64) {
        self.total_documents = total_documents;
    }

    /// Iterate over all categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.order.iter().map(|name| {
            let category = self
                .categories
                .get(name)
                .expect("ordered name has a category entry");
            (name.as_str(), category)
        })
    }

    /// Get the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check whether the state has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Reset the state to its initial condition: no categories, zero total.
    pub fn reset(&mut self) {
        self.categories.clear();
        self.order.clear();
        self.total_documents = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_created_lazily() {
        let mut state = TrainingState::new();
        assert!(state.get("spam").is_none());

        let category = state.category("spam");
        assert_eq!(category.doc_count(), 0);
        assert!(state.get("spam").is_some());
    }

    #[test]
    fn test_category_returns_same_instance() {
        let mut state = TrainingState::new();
        state.category("spam").increment_doc_count();
        state.category("spam").increment_doc_count();

        assert_eq!(state.get("spam").unwrap().doc_count(), 2);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_categories_enumerate_in_first_seen_order() {
        let mut state = TrainingState::new();
        state.category("zebra");
        state.category("apple");
        state.category("zebra");
        state.category("mango");

        let names: Vec<&str> = state.categories().map(|(name, _)| name).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_total_documents() {
        let mut state = TrainingState::new();
        state.increment_total_documents();
        state.increment_total_documents();
        assert_eq!(state.total_documents(), 2);

        state.set_total_documents(10);
        assert_eq!(state.total_documents(), 10);
    }

    #[test]
    fn test_reset() {
        let mut state = TrainingState::new();
        state.category("spam").increment_doc_count();
        state.increment_total_documents();
        state.reset();

        assert!(state.is_empty());
        assert_eq!(state.total_documents(), 0);
        assert_eq!(state.categories().count(), 0);
    }
}
