use serde::de::DeserializeOwned;

use crate::types::{FieldSpec, Text, TextList};

/// Where a record type is defined, for importing it from generated sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    /// Path of the module that exports the type (e.g. `roster_model`).
    pub module_path: &'static str,
    /// Type name (e.g. `Team`).
    pub type_name: &'static str,
}

/// Read-only view of one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Scalar(&'a str),
    ScalarList(Vec<&'a str>),
}

/// Mutable view of one field value.
#[derive(Debug)]
pub enum FieldValueMut<'a> {
    Scalar(&'a mut Text),
    ScalarList(&'a mut TextList),
}

/// A record kind that can be compiled into a literal collection.
///
/// `FIELDS`, `values` and `values_mut` must all list fields in the same
/// order: the declaration order of the struct.
pub trait Record: DeserializeOwned {
    /// Singular kind name, used in diagnostics (e.g. `team`).
    const KIND: &'static str;
    const TYPE_INFO: TypeInfo;
    /// Declared field shapes, keyed by the struct field identifier. Generated
    /// sources use these names verbatim in struct literals; serde attributes
    /// on the struct map them to data-file keys.
    const FIELDS: &'static [FieldSpec];

    fn values(&self) -> Vec<FieldValue<'_>>;

    fn values_mut(&mut self) -> Vec<FieldValueMut<'_>>;
}

/// Borrow every element of a text list as `&str`.
pub fn list_values(list: &TextList) -> Vec<&str> {
    list.iter().map(|item| item.as_ref()).collect()
}
