use crate::UserUpdate;

#[test]
fn test_empty_strings_mean_unchanged() {
    let update = UserUpdate {
        name: Some(String::new()),
        email: Some(String::new()),
    };

    assert_eq!(update.name(), None);
    assert_eq!(update.email(), None);
    assert!(update.is_empty());
}

#[test]
fn test_name_only_update() {
    let update = UserUpdate {
        name: Some("Alice Smith".to_string()),
        email: None,
    };

    assert_eq!(update.name(), Some("Alice Smith"));
    assert_eq!(update.email(), None);
    assert!(!update.is_empty());
}
