use crate::{ProfileUpdate, User};

use uuid::Uuid;

fn test_user() -> User {
    User::new(
        "alice@x.edu".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        "Alice".to_string(),
        "Nguyen".to_string(),
    )
}

#[test]
fn test_user_new() {
    let user = test_user();

    assert_eq!(user.email, "alice@x.edu");
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.last_name, "Nguyen");
    assert_eq!(user.bio, None);
    assert!(user.can_teach.is_empty());
    assert!(user.want_to_learn.is_empty());
    assert!(user.connections.is_empty());
    assert_eq!(user.coins, 0);
    assert_eq!(user.reputation, 0);
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_user_display_name() {
    let user = test_user();
    assert_eq!(user.display_name(), "Alice Nguyen");
}

#[test]
fn test_user_add_connection_is_set_insert() {
    let mut user = test_user();
    let other = Uuid::new_v4();

    assert!(!user.is_connected_to(other));
    assert!(user.add_connection(other));
    assert!(user.is_connected_to(other));

    // Second insert of the same id is a no-op
    assert!(!user.add_connection(other));
    assert_eq!(user.connections.len(), 1);
}

#[test]
fn test_user_debug_redacts_password_hash() {
    let user = test_user();
    let rendered = format!("{:?}", user);

    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("argon2id"));
}

#[test]
fn test_profile_update_applies_only_provided_fields() {
    let mut user = test_user();
    let before_email = user.email.clone();
    let before_hash = user.password_hash.clone();

    let update = ProfileUpdate {
        first_name: Some("Alicia".to_string()),
        bio: Some("Physics tutor".to_string()),
        can_teach: Some(vec!["physics".to_string(), "calculus".to_string()]),
        ..ProfileUpdate::default()
    };
    update.apply(&mut user);

    assert_eq!(user.first_name, "Alicia");
    assert_eq!(user.last_name, "Nguyen");
    assert_eq!(user.bio.as_deref(), Some("Physics tutor"));
    assert_eq!(user.can_teach, vec!["physics", "calculus"]);
    assert!(user.want_to_learn.is_empty());
    assert_eq!(user.email, before_email);
    assert_eq!(user.password_hash, before_hash);
    assert!(user.updated_at >= user.created_at);
}

#[test]
fn test_profile_update_is_empty() {
    assert!(ProfileUpdate::default().is_empty());
    assert!(
        !ProfileUpdate {
            bio: Some("hi".to_string()),
            ..ProfileUpdate::default()
        }
        .is_empty()
    );
}
