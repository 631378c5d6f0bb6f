//! Document loading

use crate::model::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load and parse a building model document export
///
/// IO and parse failures are host concerns and propagate unchanged;
/// they are not selection outcomes.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;

    let document: Document = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse document: {}", path.display()))?;

    Ok(document)
}
