//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;

/// Type marker for declarations without an explicit type annotation.
pub const VARIANT: &str = "Variant";

/// Return-type marker for methods that declare no return value.
pub const VOID: &str = "void";

/// Complete documentation extracted from a single GDScript file.
#[derive(Debug, Default, Serialize)]
pub struct ClassDoc {
    /// Explicit `class_name`, or the file's base name.
    pub class_name: String,
    /// First line of the class-level doc block.
    pub brief_description: String,
    /// Remaining lines of the class-level doc block.
    pub description: String,
    pub methods: Vec<MethodDoc>,
    pub signals: Vec<SignalDoc>,
    pub members: Vec<MemberDoc>,
    pub constants: Vec<ConstantDoc>,
}

/// A documented method.
#[derive(Debug, Default, Serialize)]
pub struct MethodDoc {
    pub name: String,
    pub params: Vec<ParamDoc>,
    /// Declared return type; absent means the method produces no value.
    pub return_type: Option<String>,
    pub description: String,
}

impl MethodDoc {
    /// Return type with the no-value marker applied.
    pub fn return_type(&self) -> &str {
        self.return_type.as_deref().unwrap_or(VOID)
    }
}

/// A documented signal.
#[derive(Debug, Default, Serialize)]
pub struct SignalDoc {
    pub name: String,
    pub params: Vec<ParamDoc>,
    pub description: String,
}

/// One entry of a parenthesized parameter list.
#[derive(Debug, Default, Serialize)]
pub struct ParamDoc {
    pub name: String,
    /// Declared type; absent means dynamically typed.
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Raw default-value expression text, unparsed.
    pub default: Option<String>,
}

impl ParamDoc {
    pub fn ty(&self) -> &str {
        self.ty.as_deref().unwrap_or(VARIANT)
    }
}

/// A documented member variable.
#[derive(Debug, Default, Serialize)]
pub struct MemberDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Raw default-value expression text, unparsed.
    pub default: Option<String>,
    pub description: String,
    /// Declaration carries an `@export` annotation.
    pub exported: bool,
}

impl MemberDoc {
    pub fn ty(&self) -> &str {
        self.ty.as_deref().unwrap_or(VARIANT)
    }
}

/// A documented constant.
#[derive(Debug, Default, Serialize)]
pub struct ConstantDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Raw value expression text, unparsed.
    pub value: String,
    pub description: String,
}
