//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod xml;

use crate::model::ClassDoc;
use anyhow::{anyhow, Result};

/// Trait for rendering a ClassDoc into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &ClassDoc) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "xml" => Ok(Box::new(xml::XmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use xml or json", format)),
    }
}
