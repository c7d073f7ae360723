//! Request extractors: the `:title` path segment and the saved `body` field

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request},
    http::{header, request::Parts},
    response::{IntoResponse, Response},
};

use super::responses;
use crate::domain::Title;

/// A path whose title segment fails validation is not a wiki route, so the
/// rejection is a plain 404.
#[async_trait]
impl<S> FromRequestParts<S> for Title
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| responses::not_found())?;

        Title::parse(&raw).ok_or_else(|| {
            tracing::debug!("Rejected title {:?}", raw);
            responses::not_found()
        })
    }
}

/// Raw bytes of the `body` form field.
///
/// Accepts URL-encoded and multipart forms. A request without form data, or a
/// form without a `body` field, yields an empty body.
#[derive(Debug)]
pub struct BodyField(pub Vec<u8>);

#[async_trait]
impl<S> FromRequest<S> for BodyField
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;

            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(IntoResponse::into_response)?
            {
                if field.name() == Some("body") {
                    let data = field.bytes().await.map_err(IntoResponse::into_response)?;
                    return Ok(Self(data.to_vec()));
                }
            }
            Ok(Self(Vec::new()))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let form = Bytes::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(form_value(&form, b"body").unwrap_or_default()))
        } else {
            Ok(Self(Vec::new()))
        }
    }
}

/// First value of `key` in a URL-encoded form, decoded without any UTF-8
/// conversion
fn form_value(form: &[u8], key: &[u8]) -> Option<Vec<u8>> {
    form.split(|&b| b == b'&').find_map(|pair| {
        let (name, value) = match pair.iter().position(|&b| b == b'=') {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, &[][..]),
        };
        (decode_component(name) == key).then(|| decode_component(value))
    })
}

fn decode_component(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    urlencoding::decode_binary(&spaced).into_owned()
}
