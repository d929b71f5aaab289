use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,https://*.vercel.app";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// `None` means job search serves demo listings.
    pub adzuna: Option<AdzunaCredentials>,
    pub adzuna_country: String,
    pub history_path: PathBuf,
    /// Optional JSON course catalog; the built-in table is used when unset.
    pub course_catalog_path: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let adzuna = match (optional_env("ADZUNA_APP_ID"), optional_env("ADZUNA_APP_KEY")) {
            (Some(app_id), Some(app_key)) => Some(AdzunaCredentials { app_id, app_key }),
            _ => None,
        };

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            adzuna,
            adzuna_country: optional_env("ADZUNA_COUNTRY").unwrap_or_else(|| "us".to_string()),
            history_path: optional_env("HISTORY_PATH")
                .unwrap_or_else(|| "career_copilot_db.json".to_string())
                .into(),
            course_catalog_path: optional_env("COURSE_CATALOG_PATH").map(PathBuf::from),
            allowed_origins: parse_origins(
                &optional_env("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGINS.to_string()),
            ),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads a variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_default_list() {
        assert_eq!(
            parse_origins(DEFAULT_ORIGINS),
            vec!["http://localhost:5173", "https://*.vercel.app"]
        );
    }

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        assert_eq!(
            parse_origins(" https://app.example.com/ , ,http://localhost:3000"),
            vec!["https://app.example.com", "http://localhost:3000"]
        );
    }
}
