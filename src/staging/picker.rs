//! Loading local files into blobs and the picker's `image/*`, single-file filter.

use std::path::Path;

use crate::error::StagingError;
use super::Blob;

/// Content type guessed from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Read a file from disk into a [`Blob`].
pub async fn load_blob(path: &Path) -> Result<Blob, StagingError> {
    let display = path.display().to_string();
    let meta = tokio::fs::metadata(path).await.map_err(|source| StagingError::Read {
        path: display.clone(),
        source,
    })?;
    if !meta.is_file() {
        return Err(StagingError::NotAFile(display));
    }
    let data = tokio::fs::read(path).await.map_err(|source| StagingError::Read {
        path: display.clone(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(display);
    Ok(Blob::new(name, content_type_for(path), data))
}

/// Apply the picker restrictions: images only, at most one file.
pub fn pick_images(candidates: Vec<Blob>) -> Vec<Blob> {
    candidates.into_iter().filter(Blob::is_image).take(1).collect()
}
