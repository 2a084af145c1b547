use crate::errors::CoreError;

/// String key → string value persistence capability.
///
/// Values are opaque serialized blobs; the store never interprets them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), CoreError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}
