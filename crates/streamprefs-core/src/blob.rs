//! Key-value blob persistence.
//!
//! The profile store keeps two kinds of entries: the id of the last selected
//! host and one encoded settings record per host.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;

/// Get/set-by-key byte storage
pub trait BlobStore {
    /// Bytes stored under `key`, or `None` when nothing is stored
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;
}

/// In-memory blob store
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Blob store persisted as a single JSON document of base64 payloads.
///
/// Every `set` rewrites the document through a temporary file and a rename,
/// so a crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FileBlobStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileBlobStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            tracing::debug!("No blob store at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.entries)?;
        write_atomically(&self.path, serialized.as_bytes())
    }
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
///
/// Parent directories are created on demand.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, contents)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.entries
            .get(key)
            .map(|encoded| STANDARD.decode(encoded).map_err(Into::into))
            .transpose()
    }

    /// On a failed write the previous value stays in place.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let previous = self
            .entries
            .insert(key.to_string(), STANDARD.encode(value));

        if let Err(error) = self.flush() {
            match previous {
                Some(previous) => self.entries.insert(key.to_string(), previous),
                None => self.entries.remove(key),
            };
            return Err(error);
        }

        tracing::debug!("Wrote blob '{}' to {}", key, self.path.display());
        Ok(())
    }
}
