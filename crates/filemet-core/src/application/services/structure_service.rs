//! Structure Service - main application orchestrator.
//!
//! This service coordinates the whole "create a file structure" workflow:
//! 1. Parse the expression into relative paths
//! 2. Resolve paths into file and directory entries
//! 3. Materialize entries through the filesystem port
//!
//! Existing files and directories are never touched; they are skipped and
//! left out of the creation report, which is how the CLI can tell the user
//! "All files and folders already exist".

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{parser, FileStructure, FsEntry},
    error::FilemetResult,
};

/// What a [`StructureService::create`] call actually wrote.
///
/// Paths are relative to the target directory, in creation order. Folders
/// cover both explicit directory entries (trailing `/`) and intermediate
/// directories created for files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationReport {
    pub files: Vec<String>,
    pub folders: Vec<String>,
}

impl CreationReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Aggregate message in the original tool's wording, `None` when
    /// nothing was created.
    pub fn summary(&self) -> Option<String> {
        let mut message = String::new();
        if !self.files.is_empty() {
            message.push_str(&format!("Created {} files", self.files.len()));
        }
        if !self.folders.is_empty() {
            if !message.is_empty() {
                message.push_str(" and ");
            } else {
                message.push_str("Created ");
            }
            message.push_str(&format!("{} folders", self.folders.len()));
        }
        (!message.is_empty()).then_some(message)
    }

    fn record_folder(&mut self, path: &Path) {
        let display = path.display().to_string();
        if !display.is_empty() && !self.folders.contains(&display) {
            self.folders.push(display);
        }
    }
}

/// Main structure creation service.
pub struct StructureService {
    filesystem: Box<dyn Filesystem>,
}

impl StructureService {
    /// Create a new structure service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Parse an expression without touching the filesystem.
    ///
    /// Used by dry runs and the `parse` command; the returned paths are
    /// exactly what [`Self::create`] would materialize.
    pub fn preview(&self, expression: &str) -> FilemetResult<Vec<String>> {
        Ok(parser::parse(expression)?)
    }

    /// Parse an expression and create its entries under `target`.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn create(&self, expression: &str, target: &Path) -> FilemetResult<CreationReport> {
        let paths = parser::parse(expression)?;
        let structure = FileStructure::resolve(target, &paths);

        info!(entries = structure.entry_count(), "Expression parsed");

        // The target itself may not exist yet (e.g. a fresh project dir);
        // it is not part of the report.
        if !self.filesystem.exists(structure.root()) {
            self.filesystem.create_dir_all(structure.root())?;
        }

        let mut report = CreationReport::default();
        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(rel) => {
                    self.ensure_directory(structure.root(), rel, &mut report)?;
                }
                FsEntry::File(rel) => {
                    if let Some(parent) = rel.parent().filter(|p| !p.as_os_str().is_empty()) {
                        self.ensure_directory(structure.root(), parent, &mut report)?;
                    }

                    let full = structure.root().join(rel);
                    if self.filesystem.exists(&full) {
                        debug!(path = %full.display(), "file exists, skipping");
                        continue;
                    }
                    self.filesystem.write_file(&full, "")?;
                    report.files.push(rel.display().to_string());
                }
            }
        }

        info!(
            files = report.files.len(),
            folders = report.folders.len(),
            "Structure created"
        );
        Ok(report)
    }

    fn ensure_directory(
        &self,
        root: &Path,
        rel: &Path,
        report: &mut CreationReport,
    ) -> FilemetResult<()> {
        let full = root.join(rel);
        if self.filesystem.exists(&full) {
            debug!(path = %full.display(), "directory exists, skipping");
            return Ok(());
        }
        self.filesystem.create_dir_all(&full)?;
        report.record_folder(rel);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
