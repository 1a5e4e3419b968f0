//! Read, default-fill and write back a list of template files

use colored::*;
use eyre::Result;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{FillChanges, TemplateError, apply_defaults};

/// Result of processing one template that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Path does not exist, nothing was written
    NotFound,
    /// Template was rewritten
    Updated { name: String, changes: FillChanges },
    /// Dry run: template was checked but not written
    WouldUpdate { name: String, changes: FillChanges },
}

/// Counters for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Templates written (or checked, in dry-run mode)
    pub updated: usize,
    pub not_found: usize,
    pub failed: usize,
}

/// Applies the template defaults to each configured path in order
pub struct TemplateDefaulter {
    paths: Vec<PathBuf>,
    dry_run: bool,
}

impl TemplateDefaulter {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths, dry_run: false }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Process every path, writing one notice per template plus a closing summary.
    ///
    /// Per-template failures are reported and skipped; only errors writing to
    /// `out` itself are returned.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for path in &self.paths {
            match self.process_file(path) {
                Ok(FileOutcome::NotFound) => {
                    summary.not_found += 1;
                    writeln!(out, "File not found: {}", path.display())?;
                }
                Ok(FileOutcome::Updated { name, .. }) => {
                    summary.updated += 1;
                    writeln!(out, "{} Updated: {}", "✓".green(), name)?;
                }
                Ok(FileOutcome::WouldUpdate { name, changes }) => {
                    summary.updated += 1;
                    if changes.is_empty() {
                        writeln!(out, "{} Already up to date: {}", "=".dimmed(), name)?;
                    } else {
                        writeln!(
                            out,
                            "{} Would update: {} (readonly: {}, maxHits: {})",
                            "~".yellow(),
                            name,
                            if changes.readonly_added { "added" } else { "kept" },
                            changes.max_hits_added
                        )?;
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    writeln!(out, "{} Error updating {}: {}", "✗".red(), e.path().display(), e)?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "All templates updated successfully!")?;

        info!(
            updated = summary.updated,
            not_found = summary.not_found,
            failed = summary.failed,
            dry_run = self.dry_run,
            "Run complete"
        );
        Ok(summary)
    }

    /// Run the read/fill/write cycle for a single template
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome, TemplateError> {
        if !path.exists() {
            debug!(?path, "process_file: not found");
            return Ok(FileOutcome::NotFound);
        }

        let mut doc = load(path)?;
        let changes = apply_defaults(&mut doc).map_err(|e| e.at(path))?;
        let name = base_name(path);

        if self.dry_run {
            debug!(?path, ?changes, "process_file: dry run, skipping write");
            return Ok(FileOutcome::WouldUpdate { name, changes });
        }

        save(path, &doc)?;
        debug!(?path, ?changes, "process_file: written");
        Ok(FileOutcome::Updated { name, changes })
    }
}

fn load(path: &Path) -> Result<Value, TemplateError> {
    let content = fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize with 2-space indentation and swap the result into place.
///
/// Symlinks are resolved first so the file they point at is rewritten and the
/// link itself survives. The temp file lives next to that target so the final
/// rename stays on one filesystem; the original is untouched unless the
/// rename succeeds.
fn save(path: &Path, doc: &Value) -> Result<(), TemplateError> {
    let write_err = |source: std::io::Error| TemplateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(doc).map_err(|e| write_err(e.into()))?;

    let target = fs::canonicalize(path).map_err(write_err)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    let permissions = fs::metadata(&target).map_err(write_err)?.permissions();
    fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;

    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    debug!(?path, ?target, "save: persisted");
    Ok(())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
