//! Byte stores holding the serialized post collection
//!
//! The whole collection lives under one namespaced key. A store only moves
//! bytes; parsing and merging belong to the repository.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Namespaced key under which the post collection is stored
pub const STORAGE_KEY: &str = "darkwrite-posts";

/// Key-value byte store addressed by a single key.
pub trait PostStore: Send + Sync {
    /// Read the stored blob. `Ok(None)` means nothing has been written yet.
    fn read(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the stored blob. On error the previous blob must survive.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;
}

/// Store backed by one JSON file, `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store for `key` inside `dir`
    pub fn new(dir: &Path, key: &str) -> Self {
        FileStore {
            path: dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostStore for FileStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Best-effort atomic replace: write a temp file in the same directory,
    /// then rename it over the target. The temp file is removed if either
    /// step fails.
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.darkwrite-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("posts.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = replace_file(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "wrote post store");
        Ok(())
    }
}

/// Move `from` over `to`. On Windows rename refuses to replace an existing
/// destination, so it is removed first.
fn replace_file(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if to.exists() {
            fs::remove_file(to)?;
        }
    }

    fs::rename(from, to)
}

/// In-process store, mainly for tests and embedding.
///
/// An optional capacity models a storage quota: writes larger than it are
/// rejected and the previous blob is kept.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<Vec<u8>>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects blobs larger than `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            blob: Mutex::new(None),
            capacity: Some(capacity),
        }
    }

    /// Store pre-filled with raw bytes, valid or not
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        MemoryStore {
            blob: Mutex::new(Some(bytes.into())),
            capacity: None,
        }
    }

    /// Copy of the current blob
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        // A poisoned lock still holds the last complete blob.
        self.blob.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PostStore for MemoryStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.lock().clone())
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(capacity) = self.capacity {
            if bytes.len() > capacity {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!(
                        "store capacity exceeded ({} bytes, limit {})",
                        bytes.len(),
                        capacity
                    ),
                ));
            }
        }

        *self.lock() = Some(bytes.to_vec());
        Ok(())
    }
}
