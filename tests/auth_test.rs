//! Integration test for the cookie-encoded auth path.
//!
//! The auth provider stores `{access_token, refresh_token}` as JSON, base64
//! encoded with a `base64-` prefix, split across two cookie fragments. These
//! tests mint real JWTs locally and push them through the same decode path
//! the extractor uses. No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use showfolio_backend::auth::cookie::{AuthTokens, decode_fragments, encode_fragments};
use showfolio_backend::auth::jwt::{Claims, decode_access_token};

/// Any secret works: the backend never verifies the signature, only decodes.
const SOME_SECRET: &str = "whatever-the-provider-signed-with";

fn mint_token(sub: &str, exp: usize) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: sub.to_string(),
        exp,
        iat: Some(now),
        email: Some("alice@example.com".to_string()),
        role: Some("authenticated".to_string()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SOME_SECRET.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

fn fresh_exp() -> usize {
    Utc::now().timestamp() as usize + 3600
}

#[test]
fn test_cookie_fragments_to_claims_round_trip() {
    let tokens = AuthTokens {
        access_token: mint_token("u1", fresh_exp()),
        refresh_token: "refresh-opaque".to_string(),
    };
    let (a, b) = encode_fragments(&tokens);

    let decoded = decode_fragments(Some(&a), Some(&b)).expect("fragments should decode");
    assert_eq!(decoded.refresh_token, "refresh-opaque");

    let claims = decode_access_token(&decoded.access_token).expect("token should decode");
    assert_eq!(claims.person_id().unwrap(), "u1");
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
}

#[test]
fn test_missing_fragment_is_unrecoverable() {
    let tokens = AuthTokens {
        access_token: mint_token("u1", fresh_exp()),
        refresh_token: "r".to_string(),
    };
    let (a, b) = encode_fragments(&tokens);

    assert!(decode_fragments(None, Some(&b)).is_err());
    assert!(decode_fragments(Some(&a), None).is_err());
}

#[test]
fn test_signature_is_not_verified() {
    // Two tokens signed with different secrets both decode: the backend
    // treats the token as an already-issued credential.
    let token = mint_token("u1", fresh_exp());
    assert!(decode_access_token(&token).is_ok());

    let other = encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: "u2".to_string(),
            exp: fresh_exp(),
            iat: None,
            email: None,
            role: None,
        },
        &EncodingKey::from_secret(b"a-completely-different-secret"),
    )
    .unwrap();
    assert_eq!(
        decode_access_token(&other).unwrap().person_id().unwrap(),
        "u2"
    );
}

#[test]
fn test_expired_token_is_rejected() {
    // Expired well past the 60s default leeway.
    let exp = (Utc::now().timestamp() - 300) as usize;
    let token = mint_token("u1", exp);

    let result = decode_access_token(&token);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    assert!(decode_access_token("not.a.valid.jwt").is_err());
}

#[test]
fn test_blank_sub_yields_no_person_id() {
    let claims = Claims {
        sub: "   ".to_string(),
        exp: fresh_exp(),
        iat: None,
        email: None,
        role: None,
    };
    assert!(claims.person_id().is_err());
}
