#![allow(dead_code)]

use pl_core::User;

/// Creates a test User with a plausible stored hash.
/// Tests that exercise real verification hash for themselves.
pub fn create_test_user(email: &str) -> User {
    User::new(
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQwMDAwMDAwMA$MDEyMzQ1Njc4OWFiY2RlZg".to_string(),
        "Test".to_string(),
        "User".to_string(),
    )
}

/// Creates a test User with profile fields filled in
pub fn create_full_test_user(email: &str) -> User {
    let mut user = create_test_user(email);
    user.bio = Some("Peer tutor since 2024".to_string());
    user.can_teach = vec!["rust".to_string(), "calculus".to_string()];
    user.want_to_learn = vec!["spanish".to_string()];
    user.coins = 40;
    user.reputation = 7;
    user
}
