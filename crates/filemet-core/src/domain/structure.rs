//! Resolved file structure ready for materialization.
//!
//! Output of running the parser against an expression: a target directory
//! plus the ordered entries to create under it. No business logic beyond the
//! file-vs-directory split lives here.

use std::path::{Path, PathBuf};

/// A single entry to create, relative to the structure root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    /// An empty file; parent directories are created as needed.
    File(PathBuf),
    /// An explicit directory, declared with a trailing `/` in the expression.
    Directory(PathBuf),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }
}

/// Final structure ready for the filesystem port.
#[derive(Debug, Clone)]
pub struct FileStructure {
    root: PathBuf,
    entries: Vec<FsEntry>,
}

impl FileStructure {
    /// Classify parsed paths under a root directory.
    ///
    /// A trailing `/` marks a directory entry (`migrations/`); everything
    /// else becomes an empty file. Order is preserved; duplicate paths are
    /// allowed here and deduplicated by the existence checks during
    /// materialization.
    pub fn resolve(root: impl Into<PathBuf>, paths: &[String]) -> Self {
        let entries = paths
            .iter()
            .map(|p| {
                if let Some(dir) = p.strip_suffix('/') {
                    FsEntry::Directory(PathBuf::from(dir.trim_end_matches('/')))
                } else {
                    FsEntry::File(PathBuf::from(p))
                }
            })
            .collect();

        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(p) => Some(p),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(p) => Some(p),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_marks_directory() {
        let structure = FileStructure::resolve(
            "/tmp/project",
            &["migrations/".into(), "app/main.py".into()],
        );

        assert_eq!(structure.directories().count(), 1);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(
            structure.entries()[0],
            FsEntry::Directory(PathBuf::from("migrations"))
        );
        assert_eq!(
            structure.entries()[1],
            FsEntry::File(PathBuf::from("app/main.py"))
        );
    }

    #[test]
    fn repeated_trailing_slashes_collapse() {
        let structure = FileStructure::resolve(".", &["static//".into()]);
        assert_eq!(
            structure.entries()[0],
            FsEntry::Directory(PathBuf::from("static"))
        );
    }

    #[test]
    fn order_is_preserved() {
        let paths: Vec<String> = vec!["b.ts".into(), "a/".into(), "c.ts".into()];
        let structure = FileStructure::resolve(".", &paths);
        let got: Vec<_> = structure.entries().iter().map(|e| e.path().to_owned()).collect();
        assert_eq!(got, [PathBuf::from("b.ts"), "a".into(), "c.ts".into()]);
    }
}
