use std::borrow::Cow;
use std::fmt;

/// Text storage for record fields.
///
/// Records loaded from data files own their text; records declared in
/// generated sources borrow `'static` literals.
pub type Text = Cow<'static, str>;

/// Ordered list of text values, with the same owned/borrowed split as [`Text`].
pub type TextList = Cow<'static, [Text]>;

/// Shape of a record field as declared by the record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single string-like value.
    Text,
    /// An ordered sequence of the inner shape.
    List(&'static FieldShape),
    Integer,
    Float,
    Boolean,
    /// A key/value mapping.
    Map,
    /// A nested record, named by its type.
    Record(&'static str),
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldShape::Text => f.write_str("text"),
            FieldShape::List(inner) => write!(f, "list<{inner}>"),
            FieldShape::Integer => f.write_str("integer"),
            FieldShape::Float => f.write_str("float"),
            FieldShape::Boolean => f.write_str("boolean"),
            FieldShape::Map => f.write_str("map"),
            FieldShape::Record(name) => write!(f, "record<{name}>"),
        }
    }
}

/// A declared field: its Rust struct field identifier and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: FieldShape,
}

impl FieldSpec {
    pub const fn new(name: &'static str, shape: FieldShape) -> Self {
        Self { name, shape }
    }
}
