// src/backend/services/upload_service.rs
//
// Single-shot image uploads. Files are validated, content-addressed by
// checksum and written under the uploads directory; the returned path is
// what the item record stores and what hosts serve statically.
use crate::{error::ServiceError, utils::crypto::calculate_sha256_hex};
use std::path::Path;
use tracing::info;

const MAX_IMAGE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5 MiB
const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Name length of the stored file stem: 16 checksum bytes, hex-encoded.
const STORED_STEM_HEX_CHARS: usize = 32;

/// Validates and stores one uploaded image.
///
/// # Arguments
/// * `upload_dir` - Directory the host serves at `/uploads`.
/// * `filename` - Client-supplied name; only its extension is kept.
/// * `data` - Raw file bytes.
///
/// # Returns
/// * The public `/uploads/<name>` path to record on the item.
pub fn save_image(
    upload_dir: &str,
    filename: &str,
    data: &[u8],
) -> Result<String, ServiceError> {
    if data.is_empty() {
        return Err(ServiceError::UploadError("empty image payload".to_string()));
    }
    if data.len() > MAX_IMAGE_SIZE_BYTES {
        return Err(ServiceError::UploadError(format!(
            "image size {} exceeds limit {}",
            data.len(),
            MAX_IMAGE_SIZE_BYTES
        )));
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ServiceError::UploadError(format!(
            "unsupported image type: {filename}"
        )));
    }

    // Content-addressed name: same bytes land on the same file, so a
    // re-upload is a no-op instead of a duplicate.
    let checksum = calculate_sha256_hex(data);
    let stored_name = format!("{}.{}", &checksum[..STORED_STEM_HEX_CHARS], extension);

    let dir = Path::new(upload_dir);
    std::fs::create_dir_all(dir)
        .map_err(|e| ServiceError::StorageError(format!("create {}: {e}", dir.display())))?;
    let target = dir.join(&stored_name);
    std::fs::write(&target, data)
        .map_err(|e| ServiceError::StorageError(format!("write {}: {e}", target.display())))?;

    info!(file = %stored_name, bytes = data.len(), "image stored");
    Ok(format!("/uploads/{stored_name}"))
}
