use crate::ListUsersQuery;

#[test]
fn test_missing_email_filter_matches_all() {
    let query = ListUsersQuery::default();

    assert_eq!(query.email_filter(), "");
    assert_eq!(query.limit, 0);
    assert_eq!(query.offset, 0);
}

#[test]
fn test_email_filter_is_passed_through() {
    let query = ListUsersQuery {
        email: Some("Example.COM".to_string()),
        ..Default::default()
    };

    assert_eq!(query.email_filter(), "Example.COM");
}
