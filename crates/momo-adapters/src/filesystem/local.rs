//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use momo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MomoError, MomoResult},
};
use tracing::debug;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn list_dirs(&self, path: &Path) -> MomoResult<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(path, e, "list directory")),
        };

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        Ok(dirs)
    }

    fn list_entries(&self, path: &Path) -> MomoResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> MomoResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> MomoResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> MomoResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_dir_all(&self, path: &Path) -> MomoResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn find_dirs_named(&self, root: &Path, names: &[String]) -> MomoResult<Vec<PathBuf>> {
        let mut found = Vec::new();
        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(root).to_path_buf();
                map_io_error(&at, io::Error::other(e.to_string()), "walk directory")
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| names.iter().any(|n| n == name));
            if matches {
                debug!(path = %entry.path().display(), "Matched");
                found.push(entry.path().to_path_buf());
                walker.skip_current_dir();
            }
        }

        Ok(found)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> MomoError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_dirs_ignores_files_and_missing_paths() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("web")).unwrap();
        std::fs::write(tmp.path().join("README.md"), "").unwrap();

        let fs = LocalFilesystem::new();
        let dirs = fs.list_dirs(tmp.path()).unwrap();
        assert_eq!(dirs, vec![tmp.path().join("web")]);
        assert!(fs.list_dirs(&tmp.path().join("nope")).unwrap().is_empty());
    }

    #[test]
    fn find_dirs_named_prunes_matches() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("node_modules/pkg/dist")).unwrap();
        std::fs::create_dir_all(root.join("apps/web/dist")).unwrap();
        std::fs::create_dir_all(root.join("apps/web/src")).unwrap();
        std::fs::write(root.join("apps/web/.turbo"), "not a dir").unwrap();

        let names = vec!["node_modules".to_string(), "dist".to_string(), ".turbo".to_string()];
        let found = LocalFilesystem::new().find_dirs_named(root, &names).unwrap();

        assert_eq!(
            found,
            vec![root.join("apps/web/dist"), root.join("node_modules")]
        );
    }

    #[test]
    fn write_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("package.json");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "{}\n").unwrap();
        assert_eq!(fs.read_to_string(&file).unwrap(), "{}\n");
        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
    }

    #[test]
    fn io_errors_name_the_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.json");
        let err = LocalFilesystem::new().read_to_string(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
