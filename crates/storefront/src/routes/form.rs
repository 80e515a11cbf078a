//! Multipart form reading for pages with image uploads.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::AppError;
use crate::services::media::{MediaError, MediaStore};

/// An uploaded file part.
#[derive(Debug, Clone)]
pub struct Upload {
    pub content_type: String,
    pub bytes: Bytes,
}

/// A fully read multipart form.
///
/// Text fields may repeat (multi-selects); file inputs left empty by the
/// browser are dropped.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<Upload>>,
}

impl MultipartForm {
    /// Read every part of `multipart`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the body is malformed or too large.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                if !bytes.is_empty() {
                    form.files.entry(name).or_default().push(Upload {
                        content_type,
                        bytes,
                    });
                }
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.fields.entry(name).or_default().push(text);
            }
        }

        Ok(form)
    }

    /// First value of a text field, trimmed; empty if absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// Every non-blank value of a repeated text field.
    #[must_use]
    pub fn all(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Store every file uploaded under `name`, returning their URLs.
    ///
    /// # Errors
    ///
    /// Stops at the first file the store rejects.
    pub async fn store_files(&self, name: &str, media: &MediaStore) -> Result<Vec<String>, MediaError> {
        let mut urls = Vec::new();
        for upload in self.files.get(name).into_iter().flatten() {
            urls.push(media.store(&upload.content_type, upload.bytes.clone()).await?);
        }
        Ok(urls)
    }
}

/// Translation key for an upload rejection.
#[must_use]
pub const fn media_error_key(error: &MediaError) -> &'static str {
    match error {
        MediaError::TooLarge(_) => "imageTooLarge",
        MediaError::Empty | MediaError::UnsupportedType(_) => "invalidImage",
    }
}
