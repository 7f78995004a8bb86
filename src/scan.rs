/// Scan workflow joining image resolution and the extraction call
///
/// This module provides the entry points for scanning a license:
/// 1. Resolve the image input into an API-ready URI
/// 2. Issue one completion request constrained by the license schema
/// 3. Hand the parsed record back to the caller
use crate::config::Config;
use crate::errors::AppError;
use crate::image_source::ImageSource;
use crate::models::LicenseRecord;
use crate::services::VisionExtractionService;
use std::path::Path;

/// Scan a license image through an existing service.
///
/// Resolves the source (URL pass-through or file encoding) and performs the
/// extraction exchange. Either a fully populated record comes back or the
/// first error is propagated unchanged.
pub async fn scan_license(
    source: &ImageSource,
    service: &VisionExtractionService,
) -> Result<LicenseRecord, AppError> {
    let image_uri = source.resolve().await?;
    service.extract_license(&image_uri).await
}

/// Scan a license image already reachable as a URI (remote URL or `data:` URI).
pub async fn scan_license_from_uri(
    image_uri: &str,
    config: &Config,
) -> Result<LicenseRecord, AppError> {
    let service = VisionExtractionService::new(config)?;
    service.extract_license(image_uri).await
}

/// Scan a license image stored on the local filesystem.
pub async fn scan_license_from_path(
    path: impl AsRef<Path>,
    config: &Config,
) -> Result<LicenseRecord, AppError> {
    let source = ImageSource::path(path.as_ref());
    let service = VisionExtractionService::new(config)?;
    scan_license(&source, &service).await
}

/// Scan any input string, classifying it as a URL or a path first.
pub async fn scan_license_input(
    input: &str,
    config: &Config,
) -> Result<LicenseRecord, AppError> {
    tracing::info!("Starting license scan");
    let source = ImageSource::detect(input);
    let service = VisionExtractionService::new(config)?;
    scan_license(&source, &service).await
}
