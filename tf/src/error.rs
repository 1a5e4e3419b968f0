//! Per-template error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while updating a single template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{reason}")]
    Shape { path: PathBuf, reason: String },

    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TemplateError {
    /// Path of the template the error belongs to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Shape { path, .. } | Self::Write { path, .. } => {
                path
            }
        }
    }

    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            path: PathBuf::new(),
            reason: reason.into(),
        }
    }

    /// Attach the template path to an error raised before the path was known
    pub(crate) fn at(mut self, template: &std::path::Path) -> Self {
        match &mut self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Shape { path, .. } | Self::Write { path, .. } => {
                *path = template.to_path_buf();
            }
        }
        self
    }
}
