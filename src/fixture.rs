//! Local JSON fixture handling.
//!
//! The rendering API is exercised against a fixture file shaped like
//! `{"page": "<html>...</html>"}`. The `page` markup is passed through
//! byte-for-byte: no escaping, validation, or transformation is applied
//! between the fixture, the render request, and the extracted HTML file.

use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Shape of the fixture document
///
/// Only the `page` field is consumed; any other keys are ignored. A missing
/// `page` key defaults to an empty string. A `page` that is present but not
/// a string is rejected at parse time.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    /// HTML markup for the render request
    #[serde(default)]
    pub page: String,
}

/// Load a fixture file and return its `page` markup.
pub fn load_page(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::Fixture(format!("Cannot read {}: {}", path.display(), e)))?;
    let fixture: Fixture = serde_json::from_str(&raw)?;
    Ok(fixture.page)
}

/// Extract the `page` markup from a fixture and write it verbatim to
/// `out_path`, overwriting any existing file.
pub fn extract_html(json_path: &Path, out_path: &Path) -> Result<()> {
    let page = load_page(json_path)?;
    fs::write(out_path, page)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("resp_example.json");
        let out_path = dir.path().join("resp.html");

        let html = "<html>hi</html>";
        fs::write(&json_path, format!(r#"{{"page": "{}"}}"#, html)).unwrap();

        extract_html(&json_path, &out_path).unwrap();
        assert_eq!(fs::read_to_string(&out_path).unwrap(), html);
    }

    #[test]
    fn test_absent_page_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("resp_example.json");
        let out_path = dir.path().join("resp.html");

        fs::write(&json_path, r#"{"other": 1}"#).unwrap();

        extract_html(&json_path, &out_path).unwrap();
        assert_eq!(fs::read(&out_path).unwrap(), b"");
    }

    #[test]
    fn test_missing_fixture_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_page(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Fixture(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("resp_example.json");
        fs::write(&json_path, "{not json").unwrap();

        let err = load_page(&json_path).unwrap_err();
        assert!(matches!(err, Error::Fixture(_)));
    }

    #[test]
    fn test_non_string_page_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("resp_example.json");
        fs::write(&json_path, r#"{"page": 42}"#).unwrap();

        let err = load_page(&json_path).unwrap_err();
        assert!(matches!(err, Error::Fixture(_)));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("resp_example.json");
        let out_path = dir.path().join("resp.html");

        fs::write(&out_path, "stale contents").unwrap();
        fs::write(&json_path, r#"{"page": "<p>new</p>"}"#).unwrap();

        extract_html(&json_path, &out_path).unwrap();
        assert_eq!(fs::read_to_string(&out_path).unwrap(), "<p>new</p>");
    }
}
