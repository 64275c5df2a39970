//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON body extractor that rejects into the crate's error type.
///
/// axum's stock `Json` rejection is plain text; this wrapper keeps
/// malformed-body responses in the standard `{"message": ...}` shape,
/// with the parser's message surfaced. Rejection happens before the
/// handler runs, so a bad body never reaches storage.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| Error::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
