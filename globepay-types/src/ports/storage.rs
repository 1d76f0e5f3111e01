//! Key/value storage port for session data.
//!
//! Browser local storage in the web client; here any backend that can hold
//! a few strings (memory, a file, a keychain) can sit behind it.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage data is corrupt: {0}")]
    Corrupt(String),
}

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
