use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, eyre};
use reqwest::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/lyrics/";

const API_URL_ENV: &str = "LYRIFY_API_URL";
const DISCARD_STALE_ENV: &str = "LYRIFY_DISCARD_STALE";
const TICK_MS_ENV: &str = "LYRIFY_TICK_MS";
const MIN_TICK_MS: u64 = 16;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    /// Drop responses overtaken by a newer request of the same kind.
    pub discard_stale: bool,
    pub tick_rate: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self {
            api_url: parse_api_url(&api_url)?,
            discard_stale: true,
            tick_rate: Duration::from_millis(100),
        };

        if let Some(raw) = lookup(DISCARD_STALE_ENV) {
            config.discard_stale = parse_flag(&raw).ok_or_else(|| {
                eyre!("{} must be true or false, got '{}'", DISCARD_STALE_ENV, raw)
            })?;
        }

        if let Some(raw) = lookup(TICK_MS_ENV) {
            let ms: u64 = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("{} must be a number of milliseconds", TICK_MS_ENV))?;
            config.tick_rate = Duration::from_millis(ms.max(MIN_TICK_MS));
        }

        Ok(config)
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).wrap_err_with(|| format!("{} is not a valid URL", API_URL_ENV))?;
    if url.cannot_be_a_base() {
        return Err(eyre!("{} must be an absolute http(s) URL", API_URL_ENV));
    }
    Ok(url)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
