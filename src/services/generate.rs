//! Generation service client: uploads an exported mask, returns the render.
//!
//! DESIGN
//! ======
//! The caller hands over an owned [`ExportCrop`], a point-in-time copy of the
//! painted region, so editing can continue while the upload runs. PNG
//! encoding happens on the blocking pool and the request on the async
//! runtime; neither touches the live surface.
//!
//! At most one transfer is in flight per client. A second request made while
//! one is outstanding is rejected with [`GenerateError::Busy`] instead of
//! being queued, so two encodings of an evolving mask never race.
//!
//! Wire format: `POST {url}` as `multipart/form-data` with fields `image`
//! (`mask.png`), `width`, and `height`. A 2xx JSON body carries `image` and
//! optionally `input`, both base64 PNG; failures carry `error`.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use canvas::error::CanvasError;
use canvas::export::ExportCrop;
use reqwest::multipart::{Form, Part};
use tokio::task::JoinHandle;

use crate::config::GenerateConfig;

/// File name of the generated image for a given timestamp.
#[must_use]
pub fn result_file_name(timestamp: &str) -> String {
    format!("generated_road_network_{timestamp}.png")
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Another transfer from this client has not finished yet.
    #[error("a generation request is already in flight")]
    Busy,

    /// Transport failure: connect, timeout, or body read.
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("generation service returned {status}: {message}")]
    Service { status: u16, message: String },

    /// The service answered 2xx but reported an error in the body.
    #[error("generation service rejected the mask: {0}")]
    Rejected(String),

    /// The success body could not be decoded.
    #[error("invalid generation response: {0}")]
    Decode(String),

    #[error("mask encode failed: {0}")]
    Encode(#[from] CanvasError),

    #[error("upload task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Decoded service output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Generated image, PNG bytes.
    pub image: Vec<u8>,
    /// The service's view of the submitted mask, when it echoes one back.
    pub input: Option<Vec<u8>>,
}

// =============================================================================
// IN-FLIGHT GATE
// =============================================================================

/// Single-slot admission gate for transfers.
#[derive(Debug, Clone, Default)]
pub struct TransferGate {
    busy: Arc<AtomicBool>,
}

impl TransferGate {
    /// Claim the slot, or fail with [`GenerateError::Busy`] if it is taken.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Busy`] while another permit is alive.
    pub fn try_acquire(&self) -> Result<TransferPermit, GenerateError> {
        if self.busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            tracing::warn!("generation rejected: transfer already in flight");
            return Err(GenerateError::Busy);
        }
        Ok(TransferPermit { busy: Arc::clone(&self.busy) })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Holds the gate's slot; released on drop, including when the task panics or is aborted.
#[derive(Debug)]
pub struct TransferPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for TransferPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GenerateClient {
    http: reqwest::Client,
    url: String,
    gate: TransferGate,
}

impl GenerateClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GenerateConfig) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, url: config.url.clone(), gate: TransferGate::default() })
    }

    /// Whether a transfer is currently outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Start a transfer in the background and return its handle.
    ///
    /// Admission is decided synchronously: if a transfer is already running
    /// this returns [`GenerateError::Busy`] without spawning anything. Must be
    /// called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Busy`] if a transfer is in flight.
    pub fn submit(&self, crop: ExportCrop) -> Result<JoinHandle<Result<GenerateResult, GenerateError>>, GenerateError> {
        let permit = self.gate.try_acquire()?;
        let http = self.http.clone();
        let url = self.url.clone();
        Ok(tokio::spawn(async move {
            let result = upload(&http, &url, crop).await;
            drop(permit);
            result
        }))
    }

    /// Upload `crop` and wait for the generated image.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] on admission, encoding, transport, or service failure.
    pub async fn generate(&self, crop: ExportCrop) -> Result<GenerateResult, GenerateError> {
        self.submit(crop)?.await?
    }
}

async fn upload(http: &reqwest::Client, url: &str, crop: ExportCrop) -> Result<GenerateResult, GenerateError> {
    let (width, height) = (crop.width(), crop.height());
    let png = tokio::task::spawn_blocking(move || crop.encode_png()).await??;
    tracing::info!(width, height, bytes = png.len(), %url, "uploading mask");

    let part = Part::bytes(png).file_name("mask.png").mime_str("image/png")?;
    let form = Form::new()
        .part("image", part)
        .text("width", width.to_string())
        .text("height", height.to_string());

    let response = http.post(url).multipart(form).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    let result = parse_response(status, &body);
    match &result {
        Ok(r) => tracing::info!(status, bytes = r.image.len(), "generation succeeded"),
        Err(e) => tracing::warn!(status, error = %e, "generation failed"),
    }
    result
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize, Default)]
struct WireResponse {
    image: Option<String>,
    input: Option<String>,
    error: Option<String>,
}

fn parse_response(status: u16, body: &str) -> Result<GenerateResult, GenerateError> {
    if !(200..300).contains(&status) {
        let wire: WireResponse = serde_json::from_str(body).unwrap_or_default();
        let message = wire.error.unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() { format!("HTTP {status}") } else { text.to_string() }
        });
        return Err(GenerateError::Service { status, message });
    }

    let wire: WireResponse = serde_json::from_str(body).map_err(|e| GenerateError::Decode(e.to_string()))?;
    if let Some(message) = wire.error {
        return Err(GenerateError::Rejected(message));
    }
    let image = wire.image.ok_or_else(|| GenerateError::Decode("missing `image` field".into()))?;
    Ok(GenerateResult { image: decode_image(&image)?, input: wire.input.as_deref().map(decode_image).transpose()? })
}

/// Decode a base64 PNG, tolerating a `data:` URL prefix.
fn decode_image(raw: &str) -> Result<Vec<u8>, GenerateError> {
    let payload = raw.split_once(";base64,").map_or(raw, |(_, data)| data);
    STANDARD.decode(payload.trim()).map_err(|e| GenerateError::Decode(e.to_string()))
}
