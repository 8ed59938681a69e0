//! Blocking client for the HTML rendering API.
//!
//! The client performs a single sequential attempt per invocation: a short
//! health check against `/health`, then a render POST against `/render`.
//! There are no retries and no concurrency. Transport failures are folded
//! into the crate error type so callers can tell a timeout from a refused
//! connection from a semantic API failure.

use crate::{fixture, Error, ProbeConfig, Result};
use base64::Engine as Base64Engine;
use chrono::Local;
use log::warn;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Body of the `POST /render` call
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest {
    /// HTML markup to render, passed through unmodified from the fixture
    pub page: String,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Output image format; the API expects this under the key `type`
    #[serde(rename = "type")]
    pub format: String,
    /// Image quality (0-100)
    pub quality: u8,
}

/// Body of the `/render` response
///
/// Everything except `success` is optional on the wire; failure responses
/// typically carry only `success` and `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderResponse {
    #[serde(default)]
    pub success: bool,
    pub format: Option<String>,
    pub message: Option<String>,
    pub image: Option<String>,
    pub error: Option<String>,
}

/// Decoded image returned by a successful render call
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Raw image bytes, already base64-decoded
    pub bytes: Vec<u8>,
    /// Format as declared by the API, used as the file extension
    pub format: String,
    /// Human-readable message from the API, if any
    pub message: Option<String>,
}

/// Smoke-test client for the rendering API
pub struct RenderClient {
    client: Client,
    config: ProbeConfig,
}

impl RenderClient {
    /// Create a new client from the given configuration
    pub fn new(config: ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was created with
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    // Fold a reqwest transport error into the crate error type, keeping
    // timeouts distinguishable from refused connections.
    fn transport_error(err: reqwest::Error, timeout_ms: u64) -> Error {
        if err.is_timeout() {
            Error::Timeout(timeout_ms)
        } else if err.is_connect() {
            Error::Connection(format!(
                "{} (is the API server running?)",
                err
            ))
        } else {
            Error::Connection(format!("Request failed: {}", err))
        }
    }

    /// GET `{base}/health` with the short timeout.
    ///
    /// Ok only on HTTP 200; any other status or transport error means the
    /// server is unavailable and the caller should not attempt a render.
    pub fn health_check(&self) -> Result<()> {
        let url = format!("{}/health", self.config.base_url);
        let res = self
            .client
            .get(&url)
            .timeout(Duration::from_millis(self.config.health_timeout_ms))
            .send()
            .map_err(|e| Self::transport_error(e, self.config.health_timeout_ms))?;

        let status = res.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            Err(Error::Status {
                status,
                body: res.text().unwrap_or_default(),
            })
        }
    }

    /// POST the given markup to `{base}/render` and decode the result.
    ///
    /// A non-200 status, an unparseable body, `success: false`, or a missing
    /// `image` field each map to a distinct error variant.
    pub fn render(&self, page: &str) -> Result<RenderedImage> {
        let request = RenderRequest {
            page: page.to_string(),
            width: self.config.viewport.width,
            height: self.config.viewport.height,
            format: self.config.format.clone(),
            quality: self.config.quality,
        };

        let url = format!("{}/render", self.config.base_url);
        let res = self
            .client
            .post(&url)
            .timeout(Duration::from_millis(self.config.render_timeout_ms))
            .json(&request)
            .send()
            .map_err(|e| Self::transport_error(e, self.config.render_timeout_ms))?;

        let status = res.status().as_u16();
        if status != 200 {
            return Err(Error::Status {
                status,
                body: res.text().unwrap_or_default(),
            });
        }

        let body: RenderResponse = res
            .json()
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        if !body.success {
            return Err(Error::Render(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let image_b64 = body
            .image
            .ok_or_else(|| Error::Render("response contains no image data".to_string()))?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(image_b64.as_bytes())
            .map_err(|e| Error::Decode(e.to_string()))?;

        Ok(RenderedImage {
            bytes,
            format: body.format.unwrap_or_else(|| "png".to_string()),
            message: body.message,
        })
    }

    /// Write a rendered image to the current directory under a timestamped
    /// name (`rendered_image_<YYYYMMDD_HHMMSS>.<format>`) and return the path.
    pub fn save_image(&self, image: &RenderedImage) -> Result<PathBuf> {
        self.save_image_in(Path::new("."), image)
    }

    /// Like [`save_image`](Self::save_image), but into the given directory.
    pub fn save_image_in(&self, dir: &Path, image: &RenderedImage) -> Result<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("rendered_image_{}.{}", timestamp, image.format));
        std::fs::write(&path, &image.bytes)?;
        Ok(path)
    }

    /// Run the full smoke test against the configured endpoint.
    ///
    /// The sequence is: health check, fixture load, render, save. Every
    /// outcome is reported on stdout; nothing is retried and no error is
    /// propagated. Returns `true` only when an image was rendered and saved.
    pub fn run_smoke_test(&self, fixture_path: &Path) -> bool {
        println!("Rendering API smoke test");
        println!("API URL: {}", self.config.base_url);

        match self.health_check() {
            Ok(()) => println!("Health check ok"),
            Err(e) => {
                println!("Health check failed: {}", e);
                return false;
            }
        }

        let page = match fixture::load_page(fixture_path) {
            Ok(page) => page,
            Err(e) => {
                println!("{}", e);
                return false;
            }
        };
        println!("Fixture loaded: {} chars of HTML", page.chars().count());

        println!("Sending render request...");
        let rendered = match self.render(&page) {
            Ok(rendered) => rendered,
            Err(e) => {
                println!("{}", e);
                return false;
            }
        };

        println!("Render succeeded (format: {})", rendered.format);
        if let Some(message) = &rendered.message {
            println!("Server message: {}", message);
        }

        match self.save_image(&rendered) {
            Ok(path) => {
                println!("Saved image: {} ({} bytes)", path.display(), rendered.bytes.len());
                true
            }
            Err(e) => {
                warn!("image save failed: {}", e);
                println!("Image save failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_request_uses_type_key() {
        let request = RenderRequest {
            page: "<p>x</p>".to_string(),
            width: 1920,
            height: 1080,
            format: "png".to_string(),
            quality: 80,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "png");
        assert!(value.get("format").is_none());
        assert_eq!(value["page"], "<p>x</p>");
        assert_eq!(value["width"], 1920);
        assert_eq!(value["height"], 1080);
        assert_eq!(value["quality"], 80);
    }

    #[test]
    fn test_failure_response_parses_without_image() {
        let body: RenderResponse =
            serde_json::from_str(r#"{"success": false, "error": "boom"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("boom"));
        assert!(body.image.is_none());
    }

    #[test]
    fn test_success_defaults_to_false() {
        let body: RenderResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
    }
}
