use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => HttpError::BadRequest(msg),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::Custom(msg) => HttpError::Internal(msg),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request_with_message() {
        let err = HttpError::from(ServiceError::Validation("Product data is missing".into()));
        assert!(matches!(err, HttpError::BadRequest(ref m) if m == "Product data is missing"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_keeps_message() {
        let err = HttpError::from(ServiceError::NotFound("Product not found".into()));
        assert!(matches!(err, HttpError::NotFound(ref m) if m == "Product not found"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repository_errors_map_by_kind() {
        let conflict = HttpError::from(ServiceError::from(RepositoryError::AlreadyExists(
            "product id 1".into(),
        )));
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let internal = HttpError::from(ServiceError::from(RepositoryError::Custom(
            "product id space exhausted".into(),
        )));
        assert!(matches!(internal, HttpError::Internal(ref m) if m == "product id space exhausted"));
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
