//! Bundled-input loading.
//!
//! The stylesheet is read as text and inlined into the document `<style>` block;
//! media files are embedded as base64 data URIs so the finished HTML is
//! self-contained and the PDF renderer needs no resource lookups.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::info;

use crate::config::Config;
use crate::errors::RenderError;

pub const STYLESHEET: &str = "custom.css";

/// Everything the template needs besides the profile record itself.
#[derive(Debug)]
pub struct Assets {
    /// Raw CSS text, inlined into the rendered document.
    pub stylesheet: String,
    /// File stem → `data:{mime};base64,…` URI for each file in `media/`.
    pub media: BTreeMap<String, String>,
}

pub fn load(config: &Config) -> Result<Assets, RenderError> {
    let css_path = config.styles_dir().join(STYLESHEET);
    if !css_path.is_file() {
        return Err(RenderError::MissingInput(css_path));
    }
    let stylesheet = fs::read_to_string(&css_path)?;

    let media_dir = config.media_dir();
    if !media_dir.is_dir() {
        return Err(RenderError::MissingInput(media_dir));
    }

    let mut media = BTreeMap::new();
    for entry in fs::read_dir(&media_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let bytes = fs::read(&path)?;
        media.insert(stem.to_string(), data_uri(&path, &bytes));
    }

    info!(
        stylesheet = %css_path.display(),
        media_files = media.len(),
        "assets loaded"
    );
    Ok(Assets { stylesheet, media })
}

fn data_uri(path: &Path, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(path), BASE64.encode(bytes))
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
