//! HTML rendering: the profile record goes through a Tera template.
//!
//! The template receives the whole profile plus `today`, the stylesheet text and
//! the media data-URI map. Autoescaping stays on for `.html` templates; only the
//! stylesheet is inserted with `| safe`.

use std::collections::HashMap;

use chrono::Local;
use serde_json::Value;
use tera::{Context, Tera};
use tracing::info;

use crate::assets::Assets;
use crate::config::Config;
use crate::errors::RenderError;
use crate::models::Profile;

pub const TEMPLATE: &str = "profile.html";

/// Formats a `YYYY/MM` date range for display.
///
/// A present, non-empty `end` yields `"{start} - {end}"`; an open range yields
/// `"Since {start}"`.
pub fn format_duration(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) if !end.is_empty() => format!("{start} - {end}"),
        _ => format!("Since {start}"),
    }
}

/// Tera filter form of [`format_duration`].
///
/// Applies to any context object carrying `start` and an optional `end` —
/// work-experience and education entries alike: `{{ job | duration }}`.
fn duration_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let start = value
        .get("start")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("duration expects an object with a `start` field"))?;
    let end = value.get("end").and_then(Value::as_str);
    Ok(Value::String(format_duration(start, end)))
}

/// Renders the profile into a complete, self-contained HTML document.
pub fn render_html(
    config: &Config,
    profile: &Profile,
    assets: &Assets,
) -> Result<String, RenderError> {
    let template_path = config.templates_dir().join(TEMPLATE);
    if !template_path.is_file() {
        return Err(RenderError::MissingInput(template_path));
    }

    let glob = config.templates_dir().join("*.html");
    let mut tera = Tera::new(&glob.to_string_lossy())?;
    tera.register_filter("duration", duration_filter);

    let today = Local::now().date_naive();

    let mut context = Context::new();
    context.insert("profile", profile);
    context.insert("today", &today.to_string());
    context.insert("stylesheet", &assets.stylesheet);
    context.insert("media", &assets.media);

    let html = tera.render(TEMPLATE, &context)?;
    info!(bytes = html.len(), "HTML rendered");
    Ok(html)
}
