use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base name of the auth cookie. The third-party auth provider splits the
/// payload across two cookies, `{name}.0` and `{name}.1`, to stay under the
/// per-cookie size limit.
pub const AUTH_COOKIE: &str = "pf-auth-token";

/// Prefix carried by the joined cookie value before the base64 payload.
const BASE64_PREFIX: &str = "base64-";

/// The decoded auth cookie payload. Anything else the provider stores in it
/// is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("missing auth cookie fragment `{0}`")]
    MissingFragment(String),
    #[error("auth cookie value is not `base64-` prefixed")]
    MissingPrefix,
    #[error("auth cookie payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("auth cookie payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of fragment `n` of the auth cookie.
pub fn fragment_name(n: u8) -> String {
    format!("{AUTH_COOKIE}.{n}")
}

/// Join the two cookie fragments, strip the `base64-` prefix, and decode the
/// JSON token payload. A missing fragment is unrecoverable — there is no
/// single-cookie fallback.
pub fn decode_fragments(
    first: Option<&str>,
    second: Option<&str>,
) -> Result<AuthTokens, CookieError> {
    let first = first.ok_or_else(|| CookieError::MissingFragment(fragment_name(0)))?;
    let second = second.ok_or_else(|| CookieError::MissingFragment(fragment_name(1)))?;

    let joined = format!("{first}{second}");
    let payload = joined
        .strip_prefix(BASE64_PREFIX)
        .ok_or(CookieError::MissingPrefix)?;

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encode a token payload into the two-fragment cookie form. Used by tests
/// and local tooling; the real cookies are minted by the auth provider.
pub fn encode_fragments(tokens: &AuthTokens) -> (String, String) {
    let json = serde_json::to_vec(tokens).expect("token payload serializes");
    let joined = format!("{BASE64_PREFIX}{}", URL_SAFE_NO_PAD.encode(json));
    let mid = joined.len() / 2;
    let (a, b) = joined.split_at(mid);
    (a.to_string(), b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> AuthTokens {
        AuthTokens {
            access_token: "header.payload.sig".to_string(),
            refresh_token: "refresh-xyz".to_string(),
        }
    }

    #[test]
    fn round_trips_through_two_fragments() {
        let (a, b) = encode_fragments(&tokens());
        let decoded = decode_fragments(Some(&a), Some(&b)).unwrap();
        assert_eq!(decoded.access_token, "header.payload.sig");
        assert_eq!(decoded.refresh_token, "refresh-xyz");
    }

    #[test]
    fn missing_either_fragment_fails() {
        let (a, b) = encode_fragments(&tokens());
        assert!(matches!(
            decode_fragments(None, Some(&b)),
            Err(CookieError::MissingFragment(_))
        ));
        assert!(matches!(
            decode_fragments(Some(&a), None),
            Err(CookieError::MissingFragment(_))
        ));
    }

    #[test]
    fn unprefixed_payload_is_rejected() {
        let err = decode_fragments(Some("not-"), Some("prefixed")).unwrap_err();
        assert!(matches!(err, CookieError::MissingPrefix));
    }

    #[test]
    fn garbage_base64_is_rejected() {
        let err = decode_fragments(Some("base64-!!"), Some("!!")).unwrap_err();
        assert!(matches!(err, CookieError::Base64(_)));
    }
}
