//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use momo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MomoError, MomoResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect another afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if !matches!(component, Component::RootDir | Component::Prefix(_)) {
                self.directories.insert(current.clone());
            }
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.add_dir_chain(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Seed a JSON file.
    pub fn with_json(self, path: impl AsRef<Path>, value: &serde_json::Value) -> Self {
        self.with_file(path, momo_core::domain::to_pretty_json(value))
    }

    /// Seed an empty directory and its parents.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir_chain(path.as_ref());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> MomoResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> MomoResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> MomoError {
    MomoError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn children<'a>(
    paths: impl Iterator<Item = &'a PathBuf> + 'a,
    parent: &'a Path,
) -> impl Iterator<Item = &'a PathBuf> + 'a {
    paths.filter(move |p| p.parent() == Some(parent))
}

impl Filesystem for MemoryFilesystem {
    fn list_dirs(&self, path: &Path) -> MomoResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(children(inner.directories.iter(), path).cloned().collect())
    }

    fn list_entries(&self, path: &Path) -> MomoResult<Vec<String>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::filesystem(path, "no such directory").into());
        }
        let names = children(inner.directories.iter(), path)
            .chain(children(inner.files.keys(), path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> MomoResult<String> {
        let inner = self.read()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::filesystem(path, "no such file").into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> MomoResult<()> {
        self.write()?.add_dir_chain(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> MomoResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty()
                && parent.parent().is_some()
                && !inner.directories.contains(parent)
            {
                return Err(ApplicationError::filesystem(path, "Parent directory does not exist").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> MomoResult<()> {
        let mut inner = self.write()?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn find_dirs_named(&self, root: &Path, names: &[String]) -> MomoResult<Vec<PathBuf>> {
        let inner = self.read()?;
        let mut found: Vec<PathBuf> = Vec::new();

        // BTreeSet order visits a directory before anything beneath it.
        for dir in inner.directories.iter().filter(|d| d.starts_with(root) && *d != root) {
            if found.iter().any(|f| dir.starts_with(f)) {
                continue;
            }
            let matches = dir
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| names.iter().any(|n| n == name));
            if matches {
                found.push(dir.clone());
            }
        }

        Ok(found)
    }
}
