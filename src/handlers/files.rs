//! File routes. Deliberately unauthenticated: this surface is scoped as a
//! public file share (see DESIGN.md).

use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde_json::{json, Value};
use tokio_util::io::ReaderStream;

use crate::error::AppError;
use crate::models::file::FileEntry;
use crate::AppState;

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<axum::body::Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(String::from);
            content_type = field.content_type().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Read error: {e}")))?,
            );
        }
    }

    let filename =
        filename.ok_or_else(|| AppError::BadRequest("file field is required".to_string()))?;
    let data = data.ok_or_else(|| AppError::BadRequest("file data is required".to_string()))?;
    // Reported by the uploader, recorded as-is.
    let content_type =
        content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    state.store.save(&filename, &data).await?;

    Ok(Json(json!({
        "filename": filename,
        "content_type": content_type,
    })))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FileEntry>>, AppError> {
    Ok(Json(state.store.list().await?))
}

pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let (file, len) = state.store.open(&filename).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header::CONTENT_LENGTH, len)
        .body(Body::from_stream(ReaderStream::new(file)))?;

    Ok(response)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.store.remove(&filename).await?;

    Ok(Json(json!({
        "message": format!("File '{filename}' deleted successfully."),
    })))
}
