//! Renderprobe
//!
//! A small client-side toolkit for exercising an external HTML-rendering HTTP
//! API. It loads HTML markup from a local JSON fixture, submits it to the
//! `/render` endpoint, and persists the returned image. A second utility
//! extracts the fixture's markup to a plain HTML file.
//!
//! # Example
//!
//! ```no_run
//! use renderprobe::{ProbeConfig, RenderClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProbeConfig {
//!     base_url: "http://localhost:3000".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = RenderClient::new(config)?;
//! client.health_check()?;
//! let rendered = client.render("<html><body>hi</body></html>")?;
//! let path = client.save_image(&rendered)?;
//! println!("Saved: {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// Fixture loading and the HTML extractor utility
pub mod fixture;

// Blocking HTTP client for the rendering API
pub mod client;

pub use client::{RenderClient, RenderRequest, RenderResponse, RenderedImage};

/// Configuration for the smoke-test client
///
/// The defaults reproduce the contract of the rendering API under test:
/// a local endpoint, a short health-check timeout and a longer render
/// timeout, and a full-HD PNG output request.
///
/// # Examples
///
/// ```
/// let cfg = renderprobe::ProbeConfig::default();
/// assert_eq!(cfg.render_timeout_ms, 30000);
/// ```
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Base URL of the rendering API (no trailing slash)
    pub base_url: String,
    /// Timeout for the health check in milliseconds
    pub health_timeout_ms: u64,
    /// Timeout for the render call in milliseconds
    pub render_timeout_ms: u64,
    /// Requested render viewport
    pub viewport: Viewport,
    /// Requested image format ("png", "jpeg", ...)
    pub format: String,
    /// Requested image quality (0-100, meaningful for lossy formats)
    pub quality: u8,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            health_timeout_ms: 5000,
            render_timeout_ms: 30000,
            viewport: Viewport::default(),
            format: "png".to_string(),
            quality: 80,
        }
    }
}

/// Viewport dimensions requested from the renderer
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProbeConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.health_timeout_ms, 5000);
        assert_eq!(config.render_timeout_ms, 30000);
        assert_eq!(config.format, "png");
        assert_eq!(config.quality, 80);
    }

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }
}
