use roster_core::{
    FieldShape, FieldSpec, FieldValue, FieldValueMut, Record, Text, TextList, TypeInfo,
    list_values,
};
use serde::{Deserialize, Serialize};

/// A person in the organisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub name: Text,
    pub email: Text,
    pub slack_handle: Text,
    /// Names of the teams this person belongs to.
    pub teams: TextList,
}

impl Record for Person {
    const KIND: &'static str = "person";
    const TYPE_INFO: TypeInfo = TypeInfo {
        module_path: "roster_model",
        type_name: "Person",
    };
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldShape::Text),
        FieldSpec::new("email", FieldShape::Text),
        FieldSpec::new("slack_handle", FieldShape::Text),
        FieldSpec::new("teams", FieldShape::List(&FieldShape::Text)),
    ];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Scalar(&self.name),
            FieldValue::Scalar(&self.email),
            FieldValue::Scalar(&self.slack_handle),
            FieldValue::ScalarList(list_values(&self.teams)),
        ]
    }

    fn values_mut(&mut self) -> Vec<FieldValueMut<'_>> {
        vec![
            FieldValueMut::Scalar(&mut self.name),
            FieldValueMut::Scalar(&mut self.email),
            FieldValueMut::Scalar(&mut self.slack_handle),
            FieldValueMut::ScalarList(&mut self.teams),
        ]
    }
}
