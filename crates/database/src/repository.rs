use super::*;

/// A stored record.
pub type Document = serde_json::Value;

/// Edits a document in place. Returning an error abandons the update
/// and leaves the stored document untouched.
pub type Mutator<'a> = Box<dyn FnOnce(&mut Document) -> Result<(), DataError> + Send + 'a>;

/// Predicate for [`Repository::find_one`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Matches the record stored under this key.
    Key(String),
    /// Matches the first record whose string field equals the value.
    Field(&'static str, String),
}

impl Filter {
    pub fn key(key: &str) -> Self {
        Self::Key(key.to_string())
    }
    pub fn field(field: &'static str, value: &str) -> Self {
        Self::Field(field, value.to_string())
    }
    /// Evaluates the predicate against a keyed document.
    pub fn matches(&self, key: &str, doc: &Document) -> bool {
        match self {
            Self::Key(k) => k == key,
            Self::Field(f, v) => doc.get(*f).and_then(|x| x.as_str()) == Some(v.as_str()),
        }
    }
}

/// Repository defines the storage interface consumed by the credential
/// store, the stats updater, and the word pool.
/// Every call either completes or surfaces [`DataError::Unavailable`].
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// First record in the collection matching the filter.
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, DataError>;
    /// Stores a new record. Fails [`DataError::Duplicate`] if the key is taken.
    async fn insert(&self, collection: &str, key: &str, doc: Document) -> Result<Document, DataError>;
    /// Atomically applies the mutator to the record under the key.
    /// Concurrent updates of one key are serialized.
    async fn update(&self, collection: &str, key: &str, mutator: Mutator<'_>) -> Result<Document, DataError>;
    /// Removes the record under the key, if any.
    async fn delete_one(&self, collection: &str, key: &str) -> Result<(), DataError>;
    /// Every record in the collection, in key order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DataError>;
    /// Round-trips to the backend.
    async fn ping(&self) -> Result<(), DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn key_filter_ignores_contents() {
        let doc = serde_json::json!({ "username": "bob" });
        assert!(Filter::key("alice").matches("alice", &doc));
        assert!(!Filter::key("alice").matches("bob", &doc));
    }
    #[test]
    fn field_filter_is_exact() {
        let doc = serde_json::json!({ "word": "crane" });
        assert!(Filter::field("word", "crane").matches("k", &doc));
        assert!(!Filter::field("word", "Crane").matches("k", &doc));
        assert!(!Filter::field("missing", "crane").matches("k", &doc));
    }
}
