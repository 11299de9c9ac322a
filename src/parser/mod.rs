//! Parser module — dispatch by file extension.

pub mod gdscript;

use crate::model::ClassDoc;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Parse a source file into a ClassDoc based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<ClassDoc> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("gd") => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            Ok(gdscript::parse(content, stem))
        }
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}
