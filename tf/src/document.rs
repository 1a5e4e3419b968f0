//! Default-fill rules for template documents

use serde_json::{Map, Value};
use tracing::debug;

use crate::TemplateError;

/// Top-level flag marking a template as not editable
pub const READONLY_KEY: &str = "readonly";

/// Top-level sequence of bars
pub const BARS_KEY: &str = "bars";

/// Per-bar hit ceiling
pub const MAX_HITS_KEY: &str = "maxHits";

/// What `apply_defaults` inserted into a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillChanges {
    /// `readonly` was missing and has been set to `false`
    pub readonly_added: bool,
    /// Number of bars that received `maxHits: 0`
    pub max_hits_added: usize,
}

impl FillChanges {
    pub fn is_empty(&self) -> bool {
        !self.readonly_added && self.max_hits_added == 0
    }
}

/// Insert `readonly: false` and per-bar `maxHits: 0` where they are absent.
///
/// The document is validated before anything is inserted, so on error it is
/// left exactly as it was.
pub fn apply_defaults(doc: &mut Value) -> Result<FillChanges, TemplateError> {
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| TemplateError::shape("top-level value is not an object"))?;

    check_bars(obj)?;

    let mut changes = FillChanges::default();

    if !obj.contains_key(READONLY_KEY) {
        obj.insert(READONLY_KEY.to_string(), Value::Bool(false));
        changes.readonly_added = true;
    }

    if let Some(Value::Array(bars)) = obj.get_mut(BARS_KEY) {
        for bar in bars.iter_mut().filter_map(Value::as_object_mut) {
            if !bar.contains_key(MAX_HITS_KEY) {
                bar.insert(MAX_HITS_KEY.to_string(), Value::from(0));
                changes.max_hits_added += 1;
            }
        }
    }

    debug!(?changes, "apply_defaults: done");
    Ok(changes)
}

fn check_bars(obj: &Map<String, Value>) -> Result<(), TemplateError> {
    let Some(bars) = obj.get(BARS_KEY) else {
        return Ok(());
    };

    let bars = bars
        .as_array()
        .ok_or_else(|| TemplateError::shape(format!("'{}' is not an array", BARS_KEY)))?;

    if let Some(index) = bars.iter().position(|bar| !bar.is_object()) {
        return Err(TemplateError::shape(format!("'{}[{}]' is not an object", BARS_KEY, index)));
    }

    Ok(())
}
