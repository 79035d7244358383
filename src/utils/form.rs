//! # Form Field Extraction
//!
//! Reads request fields the way an HTML form handler does: body fields (on
//! POST, PUT and PATCH, URL-encoded or `multipart/form-data`) take precedence
//! over query-string fields, and a field that is absent deserializes to its
//! default. Extraction never rejects a request.

use std::collections::HashSet;
use std::convert::Infallible;

use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request},
    http::{Method, header::CONTENT_TYPE},
};
use serde::de::{
    DeserializeOwned,
    value::{Error as ValueError, MapDeserializer},
};
use tracing::{trace, warn};

/// Extractor for merged body and query fields.
///
/// `T` marks its fields `#[serde(default)]` so missing fields become empty
/// strings. Fields that cannot be deserialized fall back to `T::default()`.
#[derive(Debug)]
pub struct FormValues<T>(pub T);

impl<S, T> FromRequest<S> for FormValues<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let query_fields = Query::<Vec<(String, String)>>::from_request_parts(&mut parts, state)
            .await
            .map(|Query(fields)| fields)
            .unwrap_or_default();

        let reads_body = matches!(parts.method, Method::POST | Method::PUT | Method::PATCH);
        let body_fields = if reads_body {
            read_body_fields(Request::from_parts(parts, body), state).await
        } else {
            Vec::new()
        };

        trace!(
            query = query_fields.len(),
            body = body_fields.len(),
            "Collected form fields"
        );

        let fields = merge_fields(body_fields, query_fields);
        let deserializer: MapDeserializer<'_, _, ValueError> =
            MapDeserializer::new(fields.into_iter());
        let value = T::deserialize(deserializer).unwrap_or_else(|e| {
            warn!(error = %e, "Unreadable form fields, using defaults");
            T::default()
        });
        Ok(FormValues(value))
    }
}

/// Body fields of a URL-encoded or multipart request. Anything else, or a
/// body that fails to parse, contributes no fields.
async fn read_body_fields<S>(req: Request, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if !is_multipart {
        return Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map(|Form(fields)| fields)
            .unwrap_or_default();
    }

    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(e) => {
            warn!(error = %e, "Invalid multipart request");
            return Vec::new();
        }
    };

    let mut fields = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed to read multipart field");
                break;
            }
        };

        // File parts are not form values
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match field.text().await {
            Ok(value) => fields.push((name, value)),
            Err(e) => {
                warn!(error = %e, field = %name, "Failed to read multipart field");
                break;
            }
        }
    }
    fields
}

/// Keeps the first value seen for each key, `primary` before `secondary`.
fn merge_fields(
    primary: Vec<(String, String)>,
    secondary: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    primary
        .into_iter()
        .chain(secondary)
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect()
}
