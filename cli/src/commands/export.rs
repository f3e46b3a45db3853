//! `export`: dump the datasets as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use bsod_guide_shared::Guide;

use crate::utils::write_output;

/// Serialize the guide datasets as one JSON object.
pub fn to_json(guide: &Guide, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(guide.content())
    } else {
        serde_json::to_string(guide.content())
    };
    json.context("failed to serialize guide content")
}

/// Write the datasets as JSON to `out` (stdout when `None`).
pub fn run(out: Option<&Path>, pretty: bool) -> Result<()> {
    let guide = super::load_guide()?;
    let mut json = to_json(&guide, pretty)?;
    json.push('\n');
    write_output(out, &json)
}
