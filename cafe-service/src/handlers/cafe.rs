use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use thiserror::Error;

use crate::directory::CafeDirectory;
use crate::startup::AppState;

/// Raw query parameters for `GET /cafe`.
///
/// Both fields stay strings on purpose: the endpoint's error precedence
/// (count presence, then count parse, then city lookup) and its exact error
/// bodies are part of the wire contract, so validation happens in the
/// handler rather than in the extractor.
#[derive(Debug, Deserialize)]
pub struct CafeQuery {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
}

/// Client-input failures of the `/cafe` endpoint. All map to 400 with a
/// fixed plain-text body; none are server faults and none are retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CafeQueryError {
    #[error("count missing")]
    MissingCount,
    #[error("wrong count value")]
    InvalidCount,
    #[error("wrong city value")]
    UnknownCity,
}

impl IntoResponse for CafeQueryError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejected cafe query");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// `GET /cafe?city=<city>&count=<n>` — up to `n` café names for the city,
/// comma-joined, in directory order.
#[tracing::instrument(skip(state))]
pub async fn list_cafes(
    State(state): State<AppState>,
    Query(query): Query<CafeQuery>,
) -> Result<String, CafeQueryError> {
    resolve(
        &state.directory,
        query.city.as_deref(),
        query.count.as_deref(),
    )
}

/// Pure core of the endpoint: (directory, city, count) → body.
///
/// Check order is contractual. Count errors win over city errors even when
/// both parameters are bad, and the directory is only consulted after the
/// count parses.
fn resolve(
    directory: &CafeDirectory,
    city: Option<&str>,
    count: Option<&str>,
) -> Result<String, CafeQueryError> {
    let count = match count {
        None | Some("") => return Err(CafeQueryError::MissingCount),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| CafeQueryError::InvalidCount)?,
    };

    let cafes = city
        .filter(|c| !c.is_empty())
        .and_then(|c| directory.cafes(c))
        .ok_or(CafeQueryError::UnknownCity)?;

    let n = count.min(cafes.len());
    Ok(cafes[..n].join(","))
}
