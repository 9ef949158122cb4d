use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A set of files and directories ready to be written under `root`.
///
/// Entry paths are relative to `root`. No business logic, only data.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content: content.into(),
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(path.into()));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// Serialise `value` as two-space indented JSON with a trailing newline.
    pub fn with_json(self, path: impl Into<PathBuf>, value: &serde_json::Value) -> Self {
        self.with_file(path, to_pretty_json(value))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidStructure("structure is empty".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::InvalidStructure(format!(
                    "duplicate path {}",
                    path.display()
                )));
            }

            if path.is_absolute() {
                return Err(DomainError::InvalidStructure(format!(
                    "absolute path {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            FsEntry::Directory(_) => None,
        })
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(PathBuf),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => d,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

/// The JSON layout every file momo writes uses.
pub fn to_pretty_json(value: &serde_json::Value) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_structure_is_invalid() {
        assert!(ProjectStructure::new("/tmp/x").validate().is_err());
    }

    #[test]
    fn duplicate_paths_are_invalid() {
        let s = ProjectStructure::new("/tmp/x")
            .with_directory("apps")
            .with_directory("apps");
        assert!(matches!(
            s.validate(),
            Err(DomainError::InvalidStructure(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn absolute_entry_is_invalid() {
        let s = ProjectStructure::new("/tmp/x").with_file("/etc/passwd", "");
        assert!(s.validate().is_err());
    }

    #[test]
    fn json_files_end_with_newline() {
        let s = ProjectStructure::new("/tmp/x").with_json("a.json", &json!({ "a": 1 }));
        let file = s.file("a.json").unwrap();
        assert_eq!(file.content, "{\n  \"a\": 1\n}\n");
    }
}
