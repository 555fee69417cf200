//! Keyed JSON document files.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use marketdeck_core::errors::Result;

/// Maps storage keys to JSON files under a data directory.
///
/// Reads of a missing key yield the document type's default. Writes go
/// to a temporary file first and are renamed into place, so a crashed
/// write never leaves a truncated document behind.
#[derive(Clone)]
pub struct JsonDocumentStore {
    data_dir: PathBuf,
}

impl JsonDocumentStore {
    /// Creates the store, ensuring the data directory exists.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Reads the document stored under `key`, or its default when the
    /// file does not exist yet.
    pub fn read<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No document at {:?}, using defaults", path);
            return Ok(T::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the document under `key`, replacing any previous content.
    pub fn write<T: Serialize>(&self, key: &str, document: &T) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = self.data_dir.join(format!("{}.json.tmp", key));
        let contents = serde_json::to_string_pretty(document)?;
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        counter: u32,
    }

    #[test]
    fn test_missing_key_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::new(dir.path()).unwrap();
        let doc: Doc = store.read("absent").unwrap();
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::new(dir.path()).unwrap();

        store.write("doc", &Doc { counter: 7 }).unwrap();
        let doc: Doc = store.read("doc").unwrap();
        assert_eq!(doc.counter, 7);

        // No temp file left behind.
        assert!(!dir.path().join("doc.json.tmp").exists());
        assert!(dir.path().join("doc.json").exists());
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDocumentStore::new(dir.path()).unwrap();
        std::fs::write(dir.path().join("doc.json"), "{not json").unwrap();

        assert!(store.read::<Doc>("doc").is_err());
    }
}
