//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the ClassDoc model directly; field order is fixed by the
//! struct definitions, so output is deterministic.

use crate::model::ClassDoc;
use crate::render::Renderer;
use anyhow::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &ClassDoc) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemberDoc;

    #[test]
    fn model_round_trips_key_fields() {
        let doc = ClassDoc {
            class_name: "Player".to_string(),
            members: vec![MemberDoc {
                name: "speed".to_string(),
                ty: Some("float".to_string()),
                default: Some("300.0".to_string()),
                description: String::new(),
                exported: true,
            }],
            ..Default::default()
        };
        let out = JsonRenderer.render(&doc).unwrap();
        assert!(out.contains("\"class_name\": \"Player\""));
        assert!(out.contains("\"type\": \"float\""));
        assert!(out.contains("\"exported\": true"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn output_is_deterministic() {
        let doc = ClassDoc {
            class_name: "Stable".to_string(),
            ..Default::default()
        };
        assert_eq!(
            JsonRenderer.render(&doc).unwrap(),
            JsonRenderer.render(&doc).unwrap()
        );
    }
}
