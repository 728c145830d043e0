use crate::{User, UserLink};

#[test]
fn test_empty_uid_does_not_overwrite_existing_uid() {
    let mut link = UserLink::new(Some("abc-123".to_string()));

    link.set_uid("");

    assert_eq!(link.uid(), Some("abc-123"));
}

#[test]
fn test_empty_uid_on_unset_link_leaves_it_unset() {
    let mut link = UserLink::default();

    link.set_uid("");

    assert_eq!(link.uid(), None);
    assert!(!link.has_uid());
}

#[test]
fn test_non_empty_uid_overwrites() {
    let mut link = UserLink::new(Some("abc-123".to_string()));

    link.set_uid("def-456");

    assert_eq!(link.uid(), Some("def-456"));
}

#[test]
fn test_changing_uid_discards_memoized_resolution() {
    let mut link = UserLink::new(Some("abc-123".to_string()));
    link.memoize(Some(User {
        uid: Some("abc-123".to_string()),
        ..User::default()
    }));

    link.set_uid("def-456");

    assert!(link.resolution().is_none());
}

#[test]
fn test_memoized_negative_resolution_is_remembered() {
    let mut link = UserLink::new(Some("gone".to_string()));

    link.memoize(None);

    assert!(matches!(link.resolution(), Some(None)));
    assert!(link.cached_user().is_none());
}

#[test]
fn test_new_filters_empty_uid() {
    let link = UserLink::new(Some("".to_string()));
    assert!(!link.has_uid());
}
