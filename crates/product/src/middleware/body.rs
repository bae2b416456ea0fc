use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::HttpError;

/// JSON body extractor that accepts requests without a `Content-Type` header.
///
/// Yields `None` when no data was sent: no bytes, whitespace only, or an
/// object with zero keys. Anything else is decoded into `T`.
pub struct JsonBody<T>(pub Option<T>);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        let raw = serde_json::from_slice::<Value>(&bytes).map_err(invalid_json)?;

        if raw.as_object().is_some_and(|fields| fields.is_empty()) {
            return Ok(Self(None));
        }

        let value = serde_json::from_value::<T>(raw).map_err(invalid_json)?;

        Ok(Self(Some(value)))
    }
}

fn invalid_json(e: serde_json::Error) -> Response {
    HttpError::BadRequest(format!("Invalid JSON body: {e}")).into_response()
}
