use std::fmt::Write as _;

use heck::ToShoutySnakeCase;
use roster_core::{FieldKind, FieldValue, Record, SchemaDescriptor, TypeInfo};

use crate::errors::GenerationError;

const SLOT_OPEN: &str = "{{";
const SLOT_CLOSE: &str = "}}";

/// Source template for one generated collection.
///
/// The record block holds one `{{field}}` slot per descriptor field and is
/// repeated once per record between the header and the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTemplate {
    header: String,
    block: String,
    footer: String,
    descriptor: SchemaDescriptor,
}

/// Build the code template for a collection of records.
pub fn synthesize(
    collection: &str,
    descriptor: &SchemaDescriptor,
    type_info: TypeInfo,
) -> CodeTemplate {
    let TypeInfo {
        module_path,
        type_name,
    } = type_info;

    let header = format!(
        "// @generated by roster-gen from {collection}.yaml. Do not edit.\n\
         \n\
         use std::borrow::Cow;\n\
         \n\
         use {module_path}::{type_name};\n\
         \n\
         pub static {ident}: &[{type_name}] = &[\n",
        ident = collection_ident(collection),
    );

    let mut block = format!("    {type_name} {{\n");
    for field in descriptor.iter() {
        let name = &field.name;
        match field.kind {
            FieldKind::Scalar => {
                let _ = writeln!(block, "        {name}: Cow::Borrowed({SLOT_OPEN}{name}{SLOT_CLOSE}),");
            }
            FieldKind::ScalarList => {
                let _ = writeln!(block, "        {name}: Cow::Borrowed(&[{SLOT_OPEN}{name}{SLOT_CLOSE}]),");
            }
        }
    }
    block.push_str("    },\n");

    CodeTemplate {
        header,
        block,
        footer: "];\n".to_string(),
        descriptor: descriptor.clone(),
    }
}

/// Name of the generated static for a collection (`teams` -> `TEAMS`).
pub fn collection_ident(collection: &str) -> String {
    collection.to_shouty_snake_case()
}

impl CodeTemplate {
    /// Full template text, slots unexpanded.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.header, self.block, self.footer)
    }

    /// Expand the template against `records`, in order.
    pub fn render<R: Record>(&self, records: &[R]) -> Result<String, GenerationError> {
        let render_error = |reason: String| GenerationError::Render {
            kind: R::KIND,
            reason,
        };

        let segments = parse_block(&self.block).map_err(render_error)?;

        let mut out = String::with_capacity(self.header.len() + self.block.len() * records.len());
        out.push_str(&self.header);

        for (index, record) in records.iter().enumerate() {
            let literals = self
                .field_literals(record)
                .map_err(|reason| render_error(format!("record {index}: {reason}")))?;

            for segment in &segments {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Slot(name) => {
                        let literal = literals
                            .iter()
                            .find(|(field, _)| field == name)
                            .map(|(_, literal)| literal)
                            .ok_or_else(|| render_error(format!("unknown slot `{name}`")))?;
                        out.push_str(literal);
                    }
                }
            }
        }

        out.push_str(&self.footer);
        Ok(out)
    }

    fn field_literals<'a, R: Record>(
        &'a self,
        record: &R,
    ) -> Result<Vec<(&'a str, String)>, String> {
        let values = record.values();
        if values.len() != self.descriptor.len() {
            return Err(format!(
                "expected {} field values, record exposes {}",
                self.descriptor.len(),
                values.len()
            ));
        }

        self.descriptor
            .iter()
            .zip(values)
            .map(|(field, value)| {
                let literal = match (field.kind, value) {
                    (FieldKind::Scalar, FieldValue::Scalar(text)) => escape_literal(text),
                    (FieldKind::ScalarList, FieldValue::ScalarList(items)) => items
                        .into_iter()
                        .map(|item| format!("Cow::Borrowed({})", escape_literal(item)))
                        .collect::<Vec<_>>()
                        .join(", "),
                    (kind, _) => {
                        return Err(format!(
                            "field `{}` is {kind:?} but the record value has another kind",
                            field.name
                        ));
                    }
                };
                Ok((field.name.as_str(), literal))
            })
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Slot(&'a str),
}

fn parse_block(block: &str) -> Result<Vec<Segment<'_>>, String> {
    let mut segments = Vec::new();
    let mut rest = block;

    while let Some(start) = rest.find(SLOT_OPEN) {
        if start > 0 {
            segments.push(Segment::Literal(&rest[..start]));
        }
        let after_open = &rest[start + SLOT_OPEN.len()..];
        let end = after_open
            .find(SLOT_CLOSE)
            .ok_or_else(|| "unterminated slot in record block".to_string())?;
        let name = &after_open[..end];
        if name.is_empty() {
            return Err("empty slot in record block".to_string());
        }
        segments.push(Segment::Slot(name));
        rest = &after_open[end + SLOT_CLOSE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}

/// Quote `value` as a Rust string literal.
///
/// Quotes, backslashes, control characters and invisible format characters
/// (bidi overrides, zero-width marks) are escaped so the literal always reads
/// back as exactly `value` and never trips rustc's
/// `text_direction_codepoint_in_literal` lint.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\'' => out.push('\''),
            ch if needs_unicode_escape(ch) => {
                let _ = write!(out, "\\u{{{:x}}}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn needs_unicode_escape(ch: char) -> bool {
    ch.is_control() || is_format_char(ch) || ch.escape_debug().len() > 1
}

/// Unicode `Cf` codepoints: invisible, and some reorder surrounding text.
fn is_format_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}
