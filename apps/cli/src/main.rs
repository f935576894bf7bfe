use std::fs;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_pdf::config::Config;
use profile_pdf::{assets, data, render};

fn main() {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("profile_pdf v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&config) {
        error!("PDF generation failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let profile = data::profile();
    let assets = assets::load(config)?;

    let html = render::render_html(config, &profile, &assets)?;
    let pdf = render::render_pdf(&html)?;

    if let Some(parent) = config.output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.output_file, &pdf)?;

    info!(
        path = %config.output_file.display(),
        bytes = pdf.len(),
        "PDF written"
    );
    Ok(())
}
