//! TemplateFill - default missing fields in JSON song templates
//!
//! Walks a fixed list of template files and makes sure every document carries
//! a `readonly` flag and every entry in its `bars` sequence carries `maxHits`.
//! Existing values are never touched and unknown fields pass through as-is.
//!
//! # Example
//!
//! ```ignore
//! use templatefill::TemplateDefaulter;
//!
//! let defaulter = TemplateDefaulter::new(vec!["public/templates/midi-jam.json".into()]);
//! let summary = defaulter.run(&mut std::io::stdout())?;
//! println!("{} updated", summary.updated);
//! ```

pub mod cli;
pub mod config;
mod defaulter;
mod document;
mod error;

pub use defaulter::{FileOutcome, RunSummary, TemplateDefaulter};
pub use document::{BARS_KEY, FillChanges, MAX_HITS_KEY, READONLY_KEY, apply_defaults};
pub use error::TemplateError;

/// Templates processed when neither the command line nor a config file names any
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "public/templates/happy-birthday.json",
    "public/templates/happy-birthday-2.json",
    "public/templates/midi-jam.json",
];
