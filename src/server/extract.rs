use crate::Error;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// JSON body that also accepts requests sent without a `Content-Type`.
///
/// An explicit non-JSON content type is still rejected.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if req.headers().contains_key(CONTENT_TYPE) {
            Json::<T>::from_request(req, state).await
        } else {
            let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                warn!("Failed to read request body: {}", rejection.body_text());
                Error::validation(rejection.body_text())
            })?;
            Json::<T>::from_bytes(&bytes)
        };

        match parsed {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                Err(Error::from(rejection))
            }
        }
    }
}
