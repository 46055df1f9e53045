//! Persisted client UI state provider trait.
//!
//! Expanded-folder sets and the view-mode preference survive across
//! sessions in durable client key-value storage. The store is injected
//! rather than reached as ambient global state so the navigation core is
//! testable without a real browser storage implementation.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for durable client key-value storage.
///
/// All values are serialized as strings (JSON). Key construction is
/// centralized in [`crate::keys`].
#[async_trait]
pub trait UiStateStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key.
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Get a typed value by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value by serializing to JSON.
    async fn set_json<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json).await
    }
}
