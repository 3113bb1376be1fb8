use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::{
    error::{
        validation::{FieldError, ValidationErrors, Violation},
        AppError,
    },
    validation::Validate,
};

/// JSON body extractor that runs the DTO's rule table before deserializing.
///
/// Handlers taking `ValidatedJson<T>` only run once the body has passed
/// `T::validate`; otherwise the request is answered with 400 and the list of
/// field errors.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        T::validate(&payload)?;

        // Values that passed the rule table can still fail to decode, e.g. 2023-02-30.
        let value = serde_json::from_value(payload).map_err(|err| {
            ValidationErrors::new(vec![FieldError::new(
                "body",
                Violation::Malformed(err.to_string()),
            )])
        })?;

        Ok(Self(value))
    }
}
