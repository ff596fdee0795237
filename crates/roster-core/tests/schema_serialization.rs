use roster_core::{FieldDescriptor, FieldKind, SchemaDescriptor};

#[test]
fn serializes_descriptor_deterministically() {
    let descriptor = SchemaDescriptor::new(vec![
        FieldDescriptor {
            name: "name".to_string(),
            kind: FieldKind::Scalar,
        },
        FieldDescriptor {
            name: "members".to_string(),
            kind: FieldKind::ScalarList,
        },
    ]);

    let json = serde_json::to_string_pretty(&descriptor).expect("serialize descriptor");
    let expected = r#"{
  "fields": [
    {
      "name": "name",
      "kind": "scalar"
    },
    {
      "name": "members",
      "kind": "scalar_list"
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn looks_up_fields_by_name() {
    let descriptor = SchemaDescriptor::new(vec![FieldDescriptor {
        name: "members".to_string(),
        kind: FieldKind::ScalarList,
    }]);

    assert_eq!(descriptor.len(), 1);
    assert_eq!(
        descriptor.field("members").map(|field| field.kind),
        Some(FieldKind::ScalarList)
    );
    assert!(descriptor.field("name").is_none());
}
