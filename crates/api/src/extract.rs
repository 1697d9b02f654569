//! Request extractors that reject through [`AppError`].
//!
//! axum's own `Path` and `Form` rejections answer with 4xx statuses and
//! their own text. These wrappers turn every rejection into
//! [`CoreError::InvalidInput`] so it gets the same response and log line as
//! any other malformed input.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use gamecoll_core::error::CoreError;
use gamecoll_core::types::DbId;

use crate::error::AppError;
use crate::forms::{parse_id, FormFields};

/// The `{id}` path segment, parsed as a decimal id.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::Core(CoreError::InvalidInput(format!(
                    "id path segment: {}",
                    rejection.body_text()
                )))
            })?;
        Ok(IdPath(parse_id("id", &raw)?))
    }
}

/// A urlencoded form body.
#[derive(Debug, Clone)]
pub struct FormBody(pub FormFields);

impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(fields) = Form::<FormFields>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::Core(CoreError::InvalidInput(format!(
                    "form body: {}",
                    rejection.body_text()
                )))
            })?;
        Ok(FormBody(fields))
    }
}
