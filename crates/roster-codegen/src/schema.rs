use std::collections::BTreeSet;

use roster_core::{FieldDescriptor, FieldKind, FieldShape, Record, SchemaDescriptor};

use crate::errors::GenerationError;

/// Build the schema descriptor for a record kind from its declared fields.
///
/// `text` fields become [`FieldKind::Scalar`] and `list<text>` fields become
/// [`FieldKind::ScalarList`]. Any other shape cannot be rendered as a literal
/// and is rejected, as is any name that cannot be written as a struct field
/// in the generated source.
pub fn reflect<R: Record>() -> Result<SchemaDescriptor, GenerationError> {
    let mut seen = BTreeSet::new();
    let mut fields = Vec::with_capacity(R::FIELDS.len());

    for spec in R::FIELDS {
        if !is_field_ident(spec.name) {
            return Err(GenerationError::InvalidFieldName {
                kind: R::KIND,
                field: spec.name.to_string(),
            });
        }

        if !seen.insert(spec.name) {
            return Err(GenerationError::DuplicateField {
                kind: R::KIND,
                field: spec.name.to_string(),
            });
        }

        let kind = classify(spec.shape).ok_or_else(|| GenerationError::UnsupportedFieldKind {
            kind: R::KIND,
            field: spec.name.to_string(),
            shape: spec.shape,
        })?;

        fields.push(FieldDescriptor {
            name: spec.name.to_string(),
            kind,
        });
    }

    Ok(SchemaDescriptor::new(fields))
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

fn is_field_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        && name != "_"
        && !KEYWORDS.contains(&name)
}

fn classify(shape: FieldShape) -> Option<FieldKind> {
    match shape {
        FieldShape::Text => Some(FieldKind::Scalar),
        FieldShape::List(FieldShape::Text) => Some(FieldKind::ScalarList),
        _ => None,
    }
}
