//! GDScript doc-comment extractor.
//!
//! One independent recognizer per declaration kind, each matching a single
//! line; every recognized site is associated with the contiguous `##` block
//! immediately above it. Unrecognized lines are skipped silently — doc
//! comments may legitimately precede constructs this tool does not reflect.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^class_name\s+(\w+)").unwrap());

static RE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:extends|class_name)\b").unwrap());

static RE_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^signal\s+(\w+)\s*(\(.*?\))?").unwrap());

static RE_FUNC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^func\s+(\w+)\s*\((.*?)\)\s*(?:->\s*(\w+))?").unwrap());

static RE_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@export\s+)?var\s+(\w+)(?:\s*:\s*(\w+))?(?:\s*=\s*(.+?))?(?:\s*#.*)?$")
        .unwrap()
});

static RE_CONST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^const\s+(\w+)(?:\s*:\s*(\w+))?\s*=\s*(.+?)(?:\s*#.*)?$").unwrap()
});

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(?:\s*:\s*(\w+))?(?:\s*=\s*(.+))?").unwrap());

/// Private `_`-prefixed method names that stay visible: engine-invoked
/// lifecycle callbacks expected to appear in generated documentation.
const LIFECYCLE_CALLBACKS: &[&str] = &[
    "_ready",
    "_process",
    "_physics_process",
    "_input",
    "_unhandled_input",
];

// -- Public API ---------------------------------------------------------------

/// Parse GDScript source into a ClassDoc.
///
/// `stem` is the file's base name, used as the class name when the source
/// has no `class_name` declaration.
pub fn parse(input: &str, stem: &str) -> ClassDoc {
    let lines: Vec<&str> = input.lines().collect();
    let (brief_description, description) = extract_class_doc(&lines);

    ClassDoc {
        class_name: resolve_class_name(&lines, stem),
        brief_description,
        description,
        methods: extract_methods(&lines),
        signals: extract_signals(&lines),
        members: extract_members(&lines),
        constants: extract_constants(&lines),
    }
}

// -- Doc-comment association --------------------------------------------------

/// A doc-comment line uses the `##` marker.
fn is_doc_line(line: &str) -> bool {
    line.starts_with("##")
}

/// Text of a doc-comment line with the marker removed.
fn doc_text(line: &str) -> String {
    line[2..].trim().to_string()
}

/// Class-level doc block: the first `##` run after an `extends` or
/// `class_name` header line. Header lines are skipped, not collected; once
/// collection has started, a blank line or any non-doc line ends it.
fn extract_class_doc(lines: &[&str]) -> (String, String) {
    let mut docs: Vec<String> = Vec::new();
    let mut header_seen = false;
    let mut collecting = false;

    for line in lines {
        let trimmed = line.trim();
        if !collecting && RE_HEADER.is_match(trimmed) {
            header_seen = true;
            continue;
        }
        if header_seen && is_doc_line(trimmed) {
            collecting = true;
            docs.push(doc_text(trimmed));
        } else if collecting {
            break;
        }
    }

    split_brief(&docs)
}

/// First line becomes the brief description, the rest the long description.
fn split_brief(docs: &[String]) -> (String, String) {
    let joined = docs.join("\n");
    let joined = joined.trim();
    if joined.is_empty() {
        return (String::new(), String::new());
    }
    match joined.split_once('\n') {
        Some((brief, rest)) => (brief.to_string(), rest.trim().to_string()),
        None => (joined.to_string(), String::new()),
    }
}

/// Doc block immediately above a declaration line.
///
/// Scans backward collecting consecutive `##` lines. At most one blank line
/// may separate the declaration from its block; a second blank before any
/// doc line drops the association, and a blank inside the run ends
/// collection at that point.
fn doc_comment_above(lines: &[&str], decl_idx: usize) -> String {
    let mut docs: Vec<String> = Vec::new();
    let mut blank_seen = false;

    for line in lines[..decl_idx].iter().rev() {
        let trimmed = line.trim();
        if is_doc_line(trimmed) {
            docs.push(doc_text(trimmed));
        } else if trimmed.is_empty() {
            if blank_seen || !docs.is_empty() {
                break;
            }
            blank_seen = true;
        } else {
            break;
        }
    }

    docs.reverse();
    docs.join("\n")
}

// -- Declaration recognizers --------------------------------------------------

struct SignalDecl {
    name: String,
    params: Option<String>,
}

struct FuncDecl {
    name: String,
    params: String,
    return_type: Option<String>,
}

struct VarDecl {
    name: String,
    ty: Option<String>,
    default: Option<String>,
}

struct ConstDecl {
    name: String,
    ty: Option<String>,
    value: String,
}

fn match_signal(line: &str) -> Option<SignalDecl> {
    let caps = RE_SIGNAL.captures(line)?;
    Some(SignalDecl {
        name: caps[1].to_string(),
        params: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

fn match_func(line: &str) -> Option<FuncDecl> {
    let caps = RE_FUNC.captures(line)?;
    Some(FuncDecl {
        name: caps[1].to_string(),
        params: caps[2].to_string(),
        return_type: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

fn match_var(line: &str) -> Option<VarDecl> {
    let caps = RE_VAR.captures(line)?;
    Some(VarDecl {
        name: caps[1].to_string(),
        ty: caps.get(2).map(|m| m.as_str().to_string()),
        default: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

fn match_const(line: &str) -> Option<ConstDecl> {
    let caps = RE_CONST.captures(line)?;
    Some(ConstDecl {
        name: caps[1].to_string(),
        ty: caps.get(2).map(|m| m.as_str().to_string()),
        value: caps[3].to_string(),
    })
}

fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

// -- Extraction passes --------------------------------------------------------

/// Explicit `class_name` declaration, first match wins; file stem otherwise.
fn resolve_class_name(lines: &[&str], stem: &str) -> String {
    for line in lines {
        if let Some(caps) = RE_CLASS_NAME.captures(line.trim()) {
            return caps[1].to_string();
        }
    }
    stem.to_string()
}

fn extract_signals(lines: &[&str]) -> Vec<SignalDoc> {
    let mut signals = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(decl) = match_signal(line.trim()) else {
            continue;
        };
        let params = match decl.params {
            Some(ref p) => parse_param_list(strip_parens(p)),
            None => Vec::new(),
        };
        signals.push(SignalDoc {
            name: decl.name,
            params,
            description: doc_comment_above(lines, idx),
        });
    }
    signals
}

fn extract_methods(lines: &[&str]) -> Vec<MethodDoc> {
    let mut methods = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(decl) = match_func(line.trim()) else {
            continue;
        };
        if is_private(&decl.name) && !LIFECYCLE_CALLBACKS.contains(&decl.name.as_str()) {
            continue;
        }
        methods.push(MethodDoc {
            name: decl.name,
            params: parse_param_list(&decl.params),
            return_type: decl.return_type,
            description: doc_comment_above(lines, idx),
        });
    }
    methods
}

fn extract_members(lines: &[&str]) -> Vec<MemberDoc> {
    let mut members = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        let Some(decl) = match_var(trimmed) else {
            continue;
        };
        if is_private(&decl.name) {
            continue;
        }
        // The annotation may sit inline or on the preceding line.
        let exported =
            trimmed.contains("@export") || (idx > 0 && lines[idx - 1].contains("@export"));
        members.push(MemberDoc {
            name: decl.name,
            ty: decl.ty,
            default: decl.default,
            description: doc_comment_above(lines, idx),
            exported,
        });
    }
    members
}

fn extract_constants(lines: &[&str]) -> Vec<ConstantDoc> {
    let mut constants = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(decl) = match_const(line.trim()) else {
            continue;
        };
        constants.push(ConstantDoc {
            name: decl.name,
            ty: decl.ty,
            value: decl.value,
            description: doc_comment_above(lines, idx),
        });
    }
    constants
}

// -- Parameter lists ----------------------------------------------------------

fn strip_parens(s: &str) -> &str {
    let s = s.strip_prefix('(').unwrap_or(s);
    s.strip_suffix(')').unwrap_or(s)
}

/// Split a comma-separated parameter list into ParamDoc entries.
///
/// The split is not bracket-aware: a default value with a comma inside
/// nested brackets (e.g. `p = Vector2(1, 2)`) breaks at the inner comma.
/// Known limitation. Pieces that match no parameter shape are skipped.
fn parse_param_list(text: &str) -> Vec<ParamDoc> {
    let mut params = Vec::new();
    if text.trim().is_empty() {
        return params;
    }
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some(caps) = RE_PARAM.captures(part) else {
            continue;
        };
        params.push(ParamDoc {
            name: caps[1].to_string(),
            ty: caps.get(2).map(|m| m.as_str().to_string()),
            default: caps.get(3).map(|m| m.as_str().to_string()),
        });
    }
    params
}
