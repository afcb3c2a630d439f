use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Key-value repository the handlers and services are written against.
///
/// The in-memory implementation below is the only backend; a persistent one
/// only has to implement these methods.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// Insert or replace.
    async fn put(&self, id: &str, item: T) -> Result<(), StoreError>;

    /// Insert only when `id` is free. Returns `false` when it was taken.
    async fn insert(&self, id: &str, item: T) -> Result<bool, StoreError>;

    /// Returns the removed item, if any.
    async fn delete(&self, id: &str) -> Result<Option<T>, StoreError>;

    async fn list(&self) -> Result<Vec<T>, StoreError>;
}

/// Process-lifetime storage, lost on restart.
pub struct InMemoryRepository<T> {
    items: RwLock<HashMap<String, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, item: T) -> Result<(), StoreError> {
        self.items.write().await.insert(id.to_string(), item);
        Ok(())
    }

    async fn insert(&self, id: &str, item: T) -> Result<bool, StoreError> {
        let mut items = self.items.write().await;
        if items.contains_key(id) {
            return Ok(false);
        }
        items.insert(id.to_string(), item);
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.items.write().await.remove(id))
    }

    async fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}
