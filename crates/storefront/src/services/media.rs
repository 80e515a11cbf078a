//! In-memory image store.
//!
//! Uploaded product and profile photos are kept in a bounded `moka` cache
//! and served from `/media/{id}`. Nothing is written to disk, so images
//! disappear on restart or when evicted.

use std::sync::Arc;

use axum::body::Bytes;
use moka::future::Cache;
use thiserror::Error;
use uuid::Uuid;

/// Largest accepted upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Upload rejections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("empty upload")]
    Empty,
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("image too large ({0} bytes)")]
    TooLarge(usize),
}

/// A stored image.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub content_type: String,
    pub bytes: Bytes,
}

/// Bounded store of uploaded images.
#[derive(Clone)]
pub struct MediaStore {
    cache: Cache<String, Arc<MediaFile>>,
}

impl MediaStore {
    /// Create a store holding at most `capacity` images.
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Store an image and return the URL it is served from.
    ///
    /// # Errors
    ///
    /// Rejects empty uploads, non-image content types and files larger than
    /// [`MAX_IMAGE_BYTES`].
    pub async fn store(&self, content_type: &str, bytes: Bytes) -> Result<String, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::Empty);
        }
        let content_type = content_type.trim().to_ascii_lowercase();
        if !ALLOWED_TYPES.contains(&content_type.as_str()) {
            return Err(MediaError::UnsupportedType(content_type));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(MediaError::TooLarge(bytes.len()));
        }

        let id = Uuid::new_v4().simple().to_string();
        self.cache
            .insert(
                id.clone(),
                Arc::new(MediaFile {
                    content_type,
                    bytes,
                }),
            )
            .await;
        tracing::debug!(media_id = %id, "Stored upload");
        Ok(format!("/media/{id}"))
    }

    /// Look up a stored image.
    pub async fn get(&self, id: &str) -> Option<Arc<MediaFile>> {
        self.cache.get(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_fetch() {
        let store = MediaStore::new(8);
        let url = store
            .store("image/PNG", Bytes::from_static(b"\x89PNG fake"))
            .await
            .unwrap();
        let id = url.strip_prefix("/media/").unwrap();

        let file = store.get(id).await.unwrap();
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.bytes.as_ref(), b"\x89PNG fake");
    }

    #[tokio::test]
    async fn test_rejects_non_images() {
        let store = MediaStore::new(8);
        assert_eq!(
            store.store("text/html", Bytes::from_static(b"<p>")).await,
            Err(MediaError::UnsupportedType("text/html".to_string()))
        );
        assert_eq!(
            store.store("image/png", Bytes::new()).await,
            Err(MediaError::Empty)
        );
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let store = MediaStore::new(8);
        assert!(store.get("missing").await.is_none());
    }
}
