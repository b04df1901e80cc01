//! Clipboard serialization
//!
//! The chat client reads its private clipboard flavour as a JSON object with
//! a single `ops` array. Attribute keys are camelCase (`codeBlock`).

use crate::delta::Delta;
use crate::Result;

/// Serialize a delta to compact JSON
pub fn to_json(delta: &Delta) -> Result<String> {
    Ok(serde_json::to_string(delta)?)
}

/// Serialize a delta to indented JSON
pub fn to_json_pretty(delta: &Delta) -> Result<String> {
    Ok(serde_json::to_string_pretty(delta)?)
}

/// Parse a delta and check its format invariants
pub fn from_json(json: &str) -> Result<Delta> {
    let delta: Delta = serde_json::from_str(json)?;
    delta.validate()?;
    Ok(delta)
}
