//! Godot class-reference XML renderer.
//!
//! Emits the fixed `class.xsd` element tree: a `<class>` root carrying the
//! schema-location attributes, brief/description/tutorials nodes, then one
//! section per record kind with empty sections omitted. Output is two-space
//! indented and byte-stable for a given ClassDoc; escaping of reserved
//! characters is delegated to quick-xml and is total over legal strings.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "../class.xsd";

pub struct XmlRenderer;

impl Renderer for XmlRenderer {
    fn render(&self, doc: &ClassDoc) -> Result<String> {
        let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut class = BytesStart::new("class");
        class.push_attribute(("name", doc.class_name.as_str()));
        class.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
        class.push_attribute(("xsi:noNamespaceSchemaLocation", SCHEMA_LOCATION));
        w.write_event(Event::Start(class))?;

        write_text_element(&mut w, "brief_description", &doc.brief_description)?;
        write_text_element(&mut w, "description", &doc.description)?;
        w.write_event(Event::Empty(BytesStart::new("tutorials")))?;

        if !doc.methods.is_empty() {
            w.write_event(Event::Start(BytesStart::new("methods")))?;
            for method in &doc.methods {
                write_method(&mut w, method)?;
            }
            w.write_event(Event::End(BytesEnd::new("methods")))?;
        }

        if !doc.signals.is_empty() {
            w.write_event(Event::Start(BytesStart::new("signals")))?;
            for signal in &doc.signals {
                write_signal(&mut w, signal)?;
            }
            w.write_event(Event::End(BytesEnd::new("signals")))?;
        }

        if !doc.members.is_empty() {
            w.write_event(Event::Start(BytesStart::new("members")))?;
            for member in &doc.members {
                write_member(&mut w, member)?;
            }
            w.write_event(Event::End(BytesEnd::new("members")))?;
        }

        if !doc.constants.is_empty() {
            w.write_event(Event::Start(BytesStart::new("constants")))?;
            for constant in &doc.constants {
                write_constant(&mut w, constant)?;
            }
            w.write_event(Event::End(BytesEnd::new("constants")))?;
        }

        w.write_event(Event::End(BytesEnd::new("class")))?;

        let mut out = String::from_utf8(w.into_inner())?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "xml"
    }
}

// -- Element helpers ----------------------------------------------------------

fn write_text_element(w: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_method(w: &mut Writer<Vec<u8>>, method: &MethodDoc) -> Result<()> {
    let mut elem = BytesStart::new("method");
    elem.push_attribute(("name", method.name.as_str()));
    w.write_event(Event::Start(elem))?;

    let mut ret = BytesStart::new("return");
    ret.push_attribute(("type", method.return_type()));
    w.write_event(Event::Empty(ret))?;

    for (index, param) in method.params.iter().enumerate() {
        write_param(w, index, param, true)?;
    }

    write_text_element(w, "description", &method.description)?;
    w.write_event(Event::End(BytesEnd::new("method")))?;
    Ok(())
}

fn write_signal(w: &mut Writer<Vec<u8>>, signal: &SignalDoc) -> Result<()> {
    let mut elem = BytesStart::new("signal");
    elem.push_attribute(("name", signal.name.as_str()));
    w.write_event(Event::Start(elem))?;

    // Signal parameters carry no default attribute in the schema.
    for (index, param) in signal.params.iter().enumerate() {
        write_param(w, index, param, false)?;
    }

    write_text_element(w, "description", &signal.description)?;
    w.write_event(Event::End(BytesEnd::new("signal")))?;
    Ok(())
}

fn write_param(
    w: &mut Writer<Vec<u8>>,
    index: usize,
    param: &ParamDoc,
    with_default: bool,
) -> Result<()> {
    let mut elem = BytesStart::new("param");
    elem.push_attribute(("index", index.to_string().as_str()));
    elem.push_attribute(("name", param.name.as_str()));
    elem.push_attribute(("type", param.ty()));
    if with_default {
        if let Some(ref default) = param.default {
            elem.push_attribute(("default", default.as_str()));
        }
    }
    w.write_event(Event::Empty(elem))?;
    Ok(())
}

// Member and constant descriptions are inline text content, not a child
// node. The asymmetry with methods and signals comes from the schema.
fn write_member(w: &mut Writer<Vec<u8>>, member: &MemberDoc) -> Result<()> {
    let mut elem = BytesStart::new("member");
    elem.push_attribute(("name", member.name.as_str()));
    elem.push_attribute(("type", member.ty()));
    if let Some(ref default) = member.default {
        elem.push_attribute(("default", default.as_str()));
    }
    w.write_event(Event::Start(elem))?;
    w.write_event(Event::Text(BytesText::new(&member.description)))?;
    w.write_event(Event::End(BytesEnd::new("member")))?;
    Ok(())
}

fn write_constant(w: &mut Writer<Vec<u8>>, constant: &ConstantDoc) -> Result<()> {
    let mut elem = BytesStart::new("constant");
    elem.push_attribute(("name", constant.name.as_str()));
    elem.push_attribute(("value", constant.value.as_str()));
    w.write_event(Event::Start(elem))?;
    w.write_event(Event::Text(BytesText::new(&constant.description)))?;
    w.write_event(Event::End(BytesEnd::new("constant")))?;
    Ok(())
}
