//! Pluggable snapshot validation strategies
//!
//! The build engine is the final judge of a snapshot. These checks catch the
//! common caller mistakes earlier: schema checks need nothing but the
//! snapshot, filesystem checks also look at the disk.

use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::plugin::PluginDescriptor;
use crate::snapshot::BuildSnapshot;

/// Trait for pluggable snapshot validation strategies
pub trait SnapshotValidator {
    fn validate(&self, snapshot: &BuildSnapshot) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
pub struct SchemaValidator;

impl SnapshotValidator for SchemaValidator {
    fn validate(&self, snapshot: &BuildSnapshot) -> Result<()> {
        let base = snapshot.base();

        if base.entry.is_empty() {
            return Err(BuildError::Validation {
                message: "no entry points specified".to_string(),
                hint: Some("Set `entry_point` to at least one file".to_string()),
            });
        }

        if let Some(entry) = base.entry.iter().find(|e| e.as_os_str().is_empty()) {
            return Err(BuildError::Validation {
                message: format!("entry point {entry:?} is empty"),
                hint: Some("Remove empty paths from `entry_point`".to_string()),
            });
        }

        for template in html_templates(snapshot) {
            if template.as_os_str().is_empty() {
                return Err(BuildError::Validation {
                    message: "html page has no template".to_string(),
                    hint: Some("Pass a template path to `add_html`".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then requires entry points and HTML templates to
/// exist. Relative paths are resolved against `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotValidator for FsValidator {
    fn validate(&self, snapshot: &BuildSnapshot) -> Result<()> {
        SchemaValidator.validate(snapshot)?;

        for entry in &snapshot.base().entry {
            let path = self.root.join(entry);
            if !path.exists() {
                return Err(BuildError::EntryNotFound(path));
            }
        }

        for template in html_templates(snapshot) {
            let path = self.root.join(template);
            if !path.exists() {
                return Err(BuildError::TemplateNotFound(path));
            }
        }

        Ok(())
    }
}

fn html_templates(snapshot: &BuildSnapshot) -> impl Iterator<Item = &Path> {
    snapshot.plugins().iter().filter_map(|plugin| match plugin {
        PluginDescriptor::Html(options) => Some(options.template.as_path()),
        _ => None,
    })
}

/// Convenience function for schema-only validation
pub fn validate_schema(snapshot: &BuildSnapshot) -> Result<()> {
    SchemaValidator.validate(snapshot)
}

/// Convenience function for filesystem validation
pub fn validate_fs(snapshot: &BuildSnapshot, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(snapshot)
}
