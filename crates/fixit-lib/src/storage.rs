//! Durable key-value storage.
//!
//! Two fixed records live here: the issue collection and the active
//! session. Each key maps to one JSON document on disk, rewritten in
//! full on every mutation. Single writer assumed; last write wins.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Key for the serialized issue collection.
pub const ISSUES_KEY: &str = "psu_issues";

/// Key for the serialized active session.
pub const SESSION_KEY: &str = "psu_user";

/// One JSON document per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open (creating if needed) the data directory.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize the document under `key`.
    ///
    /// An absent key is `Ok(None)`; callers decide whether that means
    /// seed data or signed-out.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failure or `Json` if the content does not
    /// parse as `T`; callers recover locally rather than propagating.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Serialize `value` and overwrite the document under `key`.
    ///
    /// Uses write-to-temp + rename for atomicity.
    ///
    /// # Errors
    ///
    /// Returns `Io` on write failure or `Json` on serialization failure.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string(value)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Remove the document under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Io` on filesystem failure.
    pub fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixitError;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.put("numbers", &vec![1, 2, 3]).unwrap();
        let loaded: Option<Vec<i32>> = store.get("numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let loaded: Option<Vec<i32>> = store.get("missing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        let loaded = store.get::<Vec<i32>>("bad");
        assert!(matches!(loaded, Err(FixitError::Json(_))));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.put("gone", &"value").unwrap();
        store.delete("gone").unwrap();
        store.delete("gone").unwrap();

        let loaded: Option<String> = store.get("gone").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_put_overwrites_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.put("doc", &vec!["a", "b"]).unwrap();
        store.put("doc", &vec!["c"]).unwrap();
        let loaded: Option<Vec<String>> = store.get("doc").unwrap();
        assert_eq!(loaded, Some(vec!["c".to_string()]));
    }
}
