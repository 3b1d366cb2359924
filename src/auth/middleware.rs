use std::future::Future;
use std::pin::Pin;

use actix_web::FromRequest;
use actix_web::{HttpRequest, dev::Payload};

use crate::auth::cookie::{decode_fragments, fragment_name};
use crate::auth::jwt;
use crate::error::ServiceError;

/// The authenticated caller, extracted from the two-fragment auth cookie.
///
/// Holds the person id from the access token's `sub` claim. Any failure on
/// the way — missing fragment, bad payload, expired token, blank sub — is a
/// 401; handlers never see a half-authenticated request.
pub struct AuthenticatedUser {
    pub person_id: String,
    pub email: Option<String>,
}

impl FromRequest for AuthenticatedUser {
    type Error = ServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let first = req.cookie(&fragment_name(0));
            let second = req.cookie(&fragment_name(1));

            let tokens = decode_fragments(
                first.as_ref().map(|c| c.value()),
                second.as_ref().map(|c| c.value()),
            )
            .map_err(|e| ServiceError::NotAuthorized(e.to_string()))?;

            let claims = jwt::decode_access_token(&tokens.access_token)
                .map_err(|e| ServiceError::NotAuthorized(format!("invalid access token: {e}")))?;

            let person_id = claims
                .person_id()
                .map_err(ServiceError::NotAuthorized)?;

            Ok(AuthenticatedUser {
                person_id,
                email: claims.email,
            })
        })
    }
}
