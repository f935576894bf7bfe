use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Everything has a default — the tool runs with no setup from a checkout.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `templates/`, `styles/` and `media/`.
    pub assets_dir: PathBuf,
    /// Where the finished PDF is written.
    pub output_file: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            assets_dir: std::env::var("PROFILE_PDF_ASSETS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
                }),
            output_file: std::env::var("PROFILE_PDF_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output/profile.pdf")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.assets_dir.join("templates")
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.assets_dir.join("styles")
    }

    pub fn media_dir(&self) -> PathBuf {
        self.assets_dir.join("media")
    }
}
