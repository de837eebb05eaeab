use super::{StorageArea, StorageError};

/// A storage area that refuses every operation, like local storage in a
/// privacy mode that blocks it outright.
#[derive(Debug, Clone, Default)]
pub struct DisabledStorage {
    reason: String,
}

impl DisabledStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StorageError {
        StorageError::Unavailable(self.reason.clone())
    }
}

impl StorageArea for DisabledStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(self.error())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(self.error())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(self.error())
    }
}
