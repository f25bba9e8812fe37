//! Request extractors and response helpers shared by the entity endpoints.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{DatabaseId, Error, endpoints::format_endpoint};

/// Like [axum::Json], but a body that does not match `T` is rejected with
/// [Error::InvalidPayload].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Payload<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidPayload(rejection.body_text())
    }
}

/// Like [axum::extract::Path], but a path parameter that cannot be parsed,
/// e.g. `/accounts/abc`, is rejected with [Error::InvalidPayload].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathId<T>(pub T);

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidPayload(rejection.body_text())
    }
}

/// A `201 Created` response with a `Location` header pointing at
/// `endpoint` formatted with `id`, and `entity` as the JSON body.
pub(crate) fn created<T: Serialize>(endpoint: &str, id: DatabaseId, entity: T) -> Response {
    (
        StatusCode::CREATED,
        [(LOCATION, format_endpoint(endpoint, id))],
        Json(entity),
    )
        .into_response()
}
