use async_trait::async_trait;
use image::ImageReader;
use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::domain::{CropDescriptor, NaturalSize};
use super::element::ProfileImage;

const MAX_PROBE_BYTES: usize = 15 * 1024 * 1024;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ProbeError {
    #[error("Failed to fetch image: {0}")]
    Fetch(String),

    #[error("Failed to read image header: {0}")]
    Decode(String),
}

/// Finds the intrinsic size of an image by URL. Stands in for the browser's
/// load event.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn natural_size(&self, url: &str) -> Result<NaturalSize, ProbeError>;
}

/// Reads only the header of an encoded image.
pub fn dimensions_of(bytes: &[u8]) -> Result<NaturalSize, ProbeError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ProbeError::Decode(format!("Failed to guess format: {e}")))?
        .into_dimensions()
        .map_err(|e| ProbeError::Decode(e.to_string()))?;

    Ok(NaturalSize { width, height })
}

fn too_large(len: u64, limit: usize) -> ProbeError {
    ProbeError::Fetch(format!("image is {len} bytes, limit is {limit}"))
}

/// Rejects a response whose `Content-Length` already exceeds `limit`.
fn check_declared_length(declared: Option<u64>, limit: usize) -> Result<(), ProbeError> {
    match declared {
        Some(len) if len > limit as u64 => Err(too_large(len, limit)),
        _ => Ok(()),
    }
}

fn append_capped(buf: &mut Vec<u8>, chunk: &[u8], limit: usize) -> Result<(), ProbeError> {
    let len = buf.len() + chunk.len();
    if len > limit {
        return Err(too_large(len as u64, limit));
    }
    buf.extend_from_slice(chunk);
    Ok(())
}

pub struct HttpImageProbe {
    client: reqwest::Client,
    cache: RwLock<HashMap<String, NaturalSize>>,
}

impl HttpImageProbe {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            cache: RwLock::new(HashMap::new()),
        })
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn natural_size(&self, url: &str) -> Result<NaturalSize, ProbeError> {
        if let Some(size) = self.cache.read().await.get(url) {
            return Ok(*size);
        }

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ProbeError::Fetch(e.to_string()))?;

        check_declared_length(response.content_length(), MAX_PROBE_BYTES)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ProbeError::Fetch(e.to_string()))?
        {
            append_capped(&mut bytes, &chunk, MAX_PROBE_BYTES)?;
        }

        let size = dimensions_of(&bytes)?;
        debug!(url, width = size.width, height = size.height, "Image probed");

        self.cache.write().await.insert(url.to_string(), size);
        Ok(size)
    }
}

/// Builds the hero image with its crop resolved.
///
/// The crop is requested first and the probe then plays the load event. If
/// the probe fails the crop stays pending and the image renders uncropped.
pub async fn prepare_profile_image(
    probe: &dyn ImageProbe,
    src: &str,
    crop: Option<CropDescriptor>,
) -> ProfileImage {
    let mut image = ProfileImage::new(src);

    let Some(crop) = crop else {
        return image;
    };
    image.request_crop(crop);

    match probe.natural_size(src).await {
        Ok(size) => image.on_load(size),
        Err(e) => warn!(src, error = %e, "Profile image probe failed, rendering uncropped"),
    }

    image
}
