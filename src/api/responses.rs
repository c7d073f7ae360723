use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::domain::DomainError;

/// `302 Found` pointing at `location`
pub fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

pub async fn not_found_handler() -> Response {
    not_found()
}

/// `500` carrying the error message as plain text
pub fn internal_error(err: DomainError) -> Response {
    tracing::error!("{}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}

pub fn html(body: String) -> Response {
    Html(body).into_response()
}
