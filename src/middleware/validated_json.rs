use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::validation::Validate;

/// JSON body extractor that also runs [`Validate`] before the handler sees
/// the payload. Malformed bodies become `INVALID_JSON`, rule violations
/// `VALIDATION_ERROR`, both with the usual error envelope.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;

        payload.validate()?;
        Ok(ValidJson(payload))
    }
}
