use crate::errors::AppError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use url::Url;

/// Where a license image comes from.
///
/// The completion API accepts either a remote URL or an inline `data:` URI,
/// so a local file has to be encoded before the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Remote image, handed to the API unchanged.
    Url(String),
    /// Local file, read and base64-encoded into a `data:` URI.
    Path(PathBuf),
}

impl ImageSource {
    /// Creates a source for a remote image URL.
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }

    /// Creates a source for a local image file.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        ImageSource::Path(path.into())
    }

    /// Classify a raw input string as a remote URL or a local path.
    ///
    /// Anything that parses as a URL with an `http`, `https`, or `data`
    /// scheme is treated as remote; everything else is a filesystem path.
    pub fn detect(input: &str) -> Self {
        match Url::parse(input) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "data") => {
                ImageSource::Url(input.to_string())
            }
            _ => ImageSource::Path(PathBuf::from(input)),
        }
    }

    /// Resolve this source into a URI the completion API accepts.
    ///
    /// URLs pass through unchanged. File reads that fail surface the
    /// underlying I/O error to the caller, no retry, no fallback.
    pub async fn resolve(&self) -> Result<String, AppError> {
        match self {
            ImageSource::Url(url) => Ok(url.clone()),
            ImageSource::Path(path) => encode_image_as_base64(path).await,
        }
    }
}

/// Read an image file and wrap it as a base64 `data:` URI.
async fn encode_image_as_base64(path: &Path) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(AppError::ImageRead)?;

    tracing::debug!(
        "Encoded license image {} ({} bytes)",
        path.display(),
        bytes.len()
    );

    Ok(format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(&bytes)
    ))
}
