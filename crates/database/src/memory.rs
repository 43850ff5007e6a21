use super::*;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

type Collection = BTreeMap<String, Document>;

/// In-process repository. One lock guards all collections, so
/// every write, including an update's read-modify-write, is atomic.
#[derive(Debug, Default)]
pub struct Memory {
    collections: RwLock<BTreeMap<String, Collection>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Repository for Memory {
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, DataError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|(k, doc)| filter.matches(k, doc)))
            .map(|(_, doc)| doc.clone()))
    }
    async fn insert(&self, collection: &str, key: &str, doc: Document) -> Result<Document, DataError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(key) {
            return Err(DataError::Duplicate);
        }
        docs.insert(key.to_string(), doc.clone());
        Ok(doc)
    }
    async fn update(&self, collection: &str, key: &str, mutator: Mutator<'_>) -> Result<Document, DataError> {
        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or(DataError::NotFound)?;
        let mut next = slot.clone();
        mutator(&mut next)?;
        *slot = next.clone();
        Ok(next)
    }
    async fn delete_one(&self, collection: &str, key: &str) -> Result<(), DataError> {
        self.collections
            .write()
            .await
            .get_mut(collection)
            .map(|docs| docs.remove(key));
        Ok(())
    }
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DataError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }
    async fn ping(&self) -> Result<(), DataError> {
        Ok(())
    }
}
