use actix_web::{HttpResponse, http::StatusCode};
use sea_orm::DbErr;
use thiserror::Error;

/// Domain-level failures, mapped to HTTP statuses in one place.
///
/// The repository layer reports absence as `Ok(None)` and write failures as
/// `false`; services translate those signals into this vocabulary. A raw
/// `DbErr` only ever escapes through the `Db` variant on read paths.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("not authorized: {0}")]
    NotAuthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("{0} couldn't be updated")]
    NotUpdated(String),
    #[error("{0} couldn't be deleted")]
    NotDeleted(String),
    #[error("bad input: {0}")]
    BadInput(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::NotAuthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::AlreadyExists(_) | ServiceError::BadInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotUpdated(_)
            | ServiceError::NotDeleted(_)
            | ServiceError::Db(_)
            | ServiceError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ServiceError::NotFound("portfolio x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::NotAuthorized("no token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::AlreadyExists("portfolio for u1".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotUpdated("portfolio x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::Db(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
