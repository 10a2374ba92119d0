use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{pager::Page, rejections::AppError};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// The raw `?page=` query parameter, left unchecked until a handler needs a page.
pub struct RawPage(pub Option<String>);

impl RawPage {
    /// Absent or non-numeric values select the first page; numbers below 1 are a
    /// bad request.
    pub fn page(&self) -> Result<Page, AppError> {
        Page::from_query(self.0.as_deref()).ok_or(AppError::BadRequest)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RawPage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.page);
        Ok(RawPage(raw))
    }
}

/// Extracts and validates the `?page=` query parameter.
pub struct PageParam(pub Page);

impl<S: Send + Sync> FromRequestParts<S> for PageParam {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match RawPage::from_request_parts(parts, state).await {
            Ok(raw) => raw,
            Err(never) => match never {},
        };
        raw.page().map(PageParam)
    }
}

/// Extracts a numeric `{id}` path segment. Anything else matches no resource.
pub struct IdParam(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for IdParam {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(IdParam(id))
    }
}

/// JSON body whose decoding failures are reported as 422 with the standard error body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("rejected request body: {e}");
            AppError::Unprocessable
        })?;
        Ok(JsonBody(value))
    }
}
