//! Extractors that deserialize and validate request input.
//!
//! Both reject with [`AppError`] so malformed or out-of-range input becomes a
//! `VALIDATION_ERROR` response before the handler body (and any store call)
//! runs.

use animewall_core::error::CoreError;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed `validator` checks.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<Wallpaper>) -> AppResult<Json<()>> {
///     // `input` is well-formed and within bounds here.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string that has passed `validator` checks.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;
        value.validate()?;
        Ok(Self(value))
    }
}
