//! Blog workspace on the local file system

use crate::error::{DarkwriteError, Result};
use crate::infrastructure::config::META_DIR;
use crate::infrastructure::store::{FileStore, STORAGE_KEY};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the workspace root
pub const ROOT_ENV: &str = "DARKWRITE_ROOT";

/// A directory holding a `.darkwrite` metadata directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the workspace root by walking up from the current directory.
    /// DARKWRITE_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(DarkwriteError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'darkwrite init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    META_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DarkwriteError::NotDarkwriteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta_dir(&self) -> PathBuf {
        self.root.join(META_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    /// Create the .darkwrite directory
    pub fn initialize(&self) -> Result<()> {
        let meta_dir = self.meta_dir();

        if meta_dir.exists() {
            return Err(DarkwriteError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&meta_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// File store holding this workspace's posts
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.meta_dir(), STORAGE_KEY)
    }
}
