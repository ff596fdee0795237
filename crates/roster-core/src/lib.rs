//! Core contracts for roster.
//!
//! This crate defines the record contract shared by record kinds, the code
//! generator and the services that read generated collections.

pub mod record;
pub mod schema;
pub mod types;

pub use record::{FieldValue, FieldValueMut, Record, TypeInfo, list_values};
pub use schema::{FieldDescriptor, FieldKind, SchemaDescriptor};
pub use types::{FieldShape, FieldSpec, Text, TextList};
