//! Uploaded image route handler.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Serve an uploaded image.
///
/// # Errors
///
/// Returns 404 when the id is unknown or the image has been evicted.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let file = state
        .media()
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("media {id}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.clone()),
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        file.bytes.clone(),
    )
        .into_response())
}
