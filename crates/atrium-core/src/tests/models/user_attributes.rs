use crate::UserAttributes;

#[test]
fn test_is_empty() {
    assert!(UserAttributes::default().is_empty());

    let attrs = UserAttributes {
        email: Some("new@example.com".to_string()),
        ..UserAttributes::default()
    };
    assert!(!attrs.is_empty());
}

#[test]
fn test_reverse_merge_keeps_supplied_values() {
    let mut attrs = UserAttributes {
        defer_confirmation: Some(false),
        ..UserAttributes::default()
    };

    attrs.reverse_merge(UserAttributes {
        defer_confirmation: Some(true),
        email: Some("default@example.com".to_string()),
        ..UserAttributes::default()
    });

    assert_eq!(attrs.defer_confirmation, Some(false));
    assert_eq!(attrs.email, Some("default@example.com".to_string()));
}

#[test]
fn test_serialization_skips_unset_fields() {
    let attrs = UserAttributes {
        email: Some("new@example.com".to_string()),
        ..UserAttributes::default()
    };

    let json = serde_json::to_value(&attrs).unwrap();

    assert_eq!(json, serde_json::json!({ "email": "new@example.com" }));
}
