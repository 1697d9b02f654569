//! Decoding of `application/x-www-form-urlencoded` request bodies.
//!
//! Forms are kept as the raw ordered list of `(name, value)` pairs so a field
//! may repeat (one `system` entry per checked checkbox). Typed accessors apply
//! the browser conventions at the handler boundary.

use gamecoll_core::error::CoreError;
use gamecoll_core::types::DbId;
use serde::Deserialize;

/// The value a browser submits for a checked checkbox without a `value` attribute.
const CHECKBOX_ON: &str = "on";

/// A decoded form body.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `name`, or `""` when the field is absent.
    pub fn text(&self, name: &str) -> &str {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Checkbox state: `true` only when the first value is exactly `"on"`.
    pub fn checkbox(&self, name: &str) -> bool {
        self.text(name) == CHECKBOX_ON
    }

    /// Every value submitted for `name`, parsed as ids.
    ///
    /// Absent means an empty list; any value that is not a decimal integer
    /// fails the whole field.
    pub fn ids(&self, name: &str) -> Result<Vec<DbId>, CoreError> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, raw)| parse_id(name, raw))
            .collect()
    }
}

/// Parse a decimal id taken from a path segment or form field.
pub fn parse_id(field: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|e| CoreError::InvalidInput(format!("{field} {raw:?} is not an id: {e}")))
}
