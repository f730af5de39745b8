use crate::error::Result;
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Key-value slots the board is persisted into
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`, or `None` if the slot is empty
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
