use bizlink_types::EntityKind;

#[test]
fn url_tags_end_with_separator() {
    for kind in EntityKind::ALL {
        assert!(kind.url_tag().ends_with('='), "{kind:?}");
    }
}

#[test]
fn url_types_are_distinct() {
    let mut types: Vec<_> = EntityKind::ALL.iter().map(|k| k.url_type()).collect();
    types.sort_unstable();
    types.dedup();
    assert_eq!(types.len(), EntityKind::ALL.len());
}

#[test]
fn from_url_type_inverts_url_type() {
    for kind in EntityKind::ALL {
        assert_eq!(EntityKind::from_url_type(kind.url_type()), Some(kind));
    }
    assert_eq!(EntityKind::from_url_type("gncAccount"), None);
}

#[test]
fn owner_tags_roundtrip_for_owner_kinds() {
    for kind in EntityKind::ALL.into_iter().filter(EntityKind::is_owner_kind) {
        let tag = kind.owner_tag().unwrap();
        assert_eq!(EntityKind::from_owner_tag(tag), Some(kind));
    }
}

#[test]
fn invoice_is_not_an_owner_kind() {
    assert!(!EntityKind::Invoice.is_owner_kind());
    assert_eq!(EntityKind::Invoice.owner_tag(), None);
}

#[test]
fn unknown_owner_tag_is_rejected() {
    assert_eq!(EntityKind::from_owner_tag('x'), None);
    assert_eq!(EntityKind::from_owner_tag('C'), None);
}

#[test]
fn display_uses_display_name() {
    assert_eq!(EntityKind::Employee.to_string(), "Employee");
}

#[test]
fn serializes_as_snake_case() {
    let json = serde_json::to_string(&EntityKind::Customer).unwrap();
    assert_eq!(json, "\"customer\"");
}
