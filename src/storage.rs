use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("could not write `{key}` to {scope} storage")]
pub struct StorageError {
    pub key: String,
    pub scope: &'static str,
}

/// Best-effort string storage: browser local/session storage, or a map in
/// tests. Reads never fail; a missing or unreadable value is `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub values: std::collections::HashMap<String, String>,
    pub read_only: bool,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError {
                key: key.to_string(),
                scope: "memory",
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
