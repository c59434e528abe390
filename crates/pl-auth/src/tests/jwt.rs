use crate::{AuthError, Claims, TokenService};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use proptest::prelude::*;
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const TTL: u64 = 3600;

fn create_raw_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    Claims {
        sub: Uuid::new_v4().to_string(),
        email: "alice@x.edu".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_issued_token_when_verified_then_returns_original_claims() {
    let service = TokenService::with_hs256(SECRET, TTL);
    let user_id = Uuid::new_v4().to_string();

    let token = service.issue(&user_id, "alice@x.edu").unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "alice@x.edu");
    assert_eq!(claims.exp - claims.iat, TTL as i64);
}

#[test]
fn given_expired_token_when_verified_then_returns_token_expired_error() {
    let service = TokenService::with_hs256(SECRET, TTL);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_raw_token(&claims, SECRET);

    let result = service.verify(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_verified_then_returns_decode_error() {
    let wrong_secret = b"wrong-secret-key-at-least-32-byt";
    let service = TokenService::with_hs256(wrong_secret, TTL);
    let claims = valid_claims();
    let token = create_raw_token(&claims, SECRET);

    let result = service.verify(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_structurally_malformed_token_when_verified_then_returns_decode_error() {
    let service = TokenService::with_hs256(SECRET, TTL);

    for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d"] {
        let result = service.verify(garbage);
        assert!(
            matches!(result, Err(AuthError::JwtDecode { .. })),
            "expected decode error for {:?}",
            garbage
        );
    }
}

#[test]
fn given_empty_sub_claim_when_verified_then_returns_invalid_claim_error() {
    let service = TokenService::with_hs256(SECRET, TTL);
    let mut claims = valid_claims();
    claims.sub = String::new();
    let token = create_raw_token(&claims, SECRET);

    let result = service.verify(&token);

    assert!(matches!(
        result,
        Err(AuthError::InvalidClaim { claim, .. }) if claim == "sub"
    ));
}

#[test]
fn given_empty_email_when_issued_then_returns_invalid_claim_error() {
    let service = TokenService::with_hs256(SECRET, TTL);

    let result = service.issue(&Uuid::new_v4().to_string(), "");

    assert!(matches!(
        result,
        Err(AuthError::InvalidClaim { claim, .. }) if claim == "email"
    ));
}

proptest! {
    #[test]
    fn given_any_identity_when_issued_then_verify_round_trips(
        raw_id in any::<u128>(),
        email in "[a-z]{1,12}@[a-z]{1,8}\\.(edu|org|com)",
    ) {
        let service = TokenService::with_hs256(SECRET, TTL);
        let user_id = Uuid::from_u128(raw_id).to_string();

        let token = service.issue(&user_id, &email).unwrap();
        let claims = service.verify(&token).unwrap();

        prop_assert_eq!(claims.sub, user_id);
        prop_assert_eq!(claims.email, email);
        prop_assert!(claims.exp > chrono::Utc::now().timestamp());
    }
}
