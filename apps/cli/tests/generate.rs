//! End-to-end: rendering the fixed profile yields a complete document.
//!
//! Mirrors a manual run against the bundled assets; nothing here touches the
//! output path — the PDF stays in memory.

use std::path::PathBuf;

use profile_pdf::config::Config;
use profile_pdf::{assets, data, render};

fn bundled_config() -> Config {
    Config {
        assets_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
        output_file: PathBuf::from("output/profile.pdf"),
        rust_log: "info".into(),
    }
}

#[test]
fn rendered_html_contains_every_section() {
    let config = bundled_config();
    let profile = data::profile();
    let assets = assets::load(&config).unwrap();

    let html = render::render_html(&config, &profile, &assets)
        .unwrap()
        .to_lowercase();

    assert!(html.contains("jonas keller"));
    for header in [
        "personal information",
        "contact",
        "links",
        "core technologies",
        "certifications",
        "work experience",
        "education",
    ] {
        assert!(html.contains(header), "missing section header: {header}");
    }

    // duration formatting, closed and open
    assert!(html.contains("2017/04 - 2022/12"));
    assert!(html.contains("since 2023/01"));

    let today = chrono::Local::now().date_naive();
    assert!(
        html.contains(&format!("last updated: {today}")),
        "missing date stamp"
    );
}

#[test]
fn rendered_html_embeds_media_inline() {
    let config = bundled_config();
    let profile = data::profile();
    let assets = assets::load(&config).unwrap();

    let html = render::render_html(&config, &profile, &assets).unwrap();
    assert!(
        html.contains("data:image/png;base64,"),
        "media should be inlined as data URIs"
    );
}

#[test]
fn pipeline_produces_a_readable_pdf() {
    let config = bundled_config();
    let profile = data::profile();
    let assets = assets::load(&config).unwrap();

    let html = render::render_html(&config, &profile, &assets).unwrap();
    let pdf = render::render_pdf(&html).unwrap();

    assert!(pdf.starts_with(b"%PDF"), "output should be a PDF");
    assert!(pdf.len() > 1_000, "suspiciously small PDF: {} bytes", pdf.len());

    let text = pdf_extract::extract_text_from_mem(&pdf)
        .unwrap()
        .to_lowercase();
    assert!(text.contains("jonas keller"), "name missing from PDF text");
}
