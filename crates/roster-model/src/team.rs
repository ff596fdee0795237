use roster_core::{
    FieldShape, FieldSpec, FieldValue, FieldValueMut, Record, Text, TextList, TypeInfo,
    list_values,
};
use serde::{Deserialize, Serialize};

/// A team and the people on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
    pub name: Text,
    pub internal_slack_channel: Text,
    /// Names of the team's members, in the order they are listed.
    pub members: TextList,
}

impl Record for Team {
    const KIND: &'static str = "team";
    const TYPE_INFO: TypeInfo = TypeInfo {
        module_path: "roster_model",
        type_name: "Team",
    };
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldShape::Text),
        FieldSpec::new("internal_slack_channel", FieldShape::Text),
        FieldSpec::new("members", FieldShape::List(&FieldShape::Text)),
    ];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Scalar(&self.name),
            FieldValue::Scalar(&self.internal_slack_channel),
            FieldValue::ScalarList(list_values(&self.members)),
        ]
    }

    fn values_mut(&mut self) -> Vec<FieldValueMut<'_>> {
        vec![
            FieldValueMut::Scalar(&mut self.name),
            FieldValueMut::Scalar(&mut self.internal_slack_channel),
            FieldValueMut::ScalarList(&mut self.members),
        ]
    }
}
