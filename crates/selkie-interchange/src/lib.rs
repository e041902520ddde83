//! Canonical textual interchange for structured values.
//!
//! The interchange format is JSON per
//! [RFC 8259](https://www.rfc-editor.org/rfc/rfc8259). [`encode`] turns any
//! serializable value into its canonical one-line text form; [`decode`]
//! parses interchange text through a *template type* chosen by the caller.
//! The template type is what gives the decoded data its capabilities: its
//! fields receive the data and its `impl` blocks travel with it, so one
//! text can decode into as many shapes as there are matching templates.
//! Decoding to [`Value`] keeps the plain structure without attaching any
//! template.
//!
//! Object keys keep their insertion order end to end: derived types encode
//! fields in declaration order, maps encode keys in insertion order, and
//! decoded objects remember the order the text spelled. Nothing is ever
//! sorted.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use serde_json::Value;

/// A failed interchange conversion.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// The text is not well-formed interchange text.
    #[error("malformed interchange text")]
    Parse(#[source] serde_json::Error),
    /// The value cannot be represented as interchange text, for example a
    /// map whose keys are not strings.
    #[error("value has no interchange representation")]
    Encode(#[source] serde_json::Error),
}

/// Encodes a value as canonical one-line interchange text.
///
/// Object keys appear in insertion order: declaration order for derived
/// structs, insertion order for maps.
///
/// # Errors
///
/// Returns [`InterchangeError::Encode`] if the value has no interchange
/// representation.
pub fn encode<T: Serialize>(value: &T) -> Result<String, InterchangeError> {
    serde_json::to_string(value).map_err(InterchangeError::Encode)
}

/// Encodes a value as multi-line indented interchange text.
///
/// Same key-order guarantee as [`encode`]; only the whitespace differs.
///
/// # Errors
///
/// Returns [`InterchangeError::Encode`] if the value has no interchange
/// representation.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(value).map_err(InterchangeError::Encode)
}

/// Decodes interchange text through the template type `T`.
///
/// Use `T = `[`Value`] to keep the plain structure without a template.
///
/// # Errors
///
/// Returns [`InterchangeError::Parse`] if the text is not well-formed
/// interchange text or does not fit the template's shape.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, InterchangeError> {
    serde_json::from_str(text).map_err(InterchangeError::Parse)
}
