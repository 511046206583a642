use anyhow::{Context, anyhow};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::modules::projects::use_cases::list_project_summaries::read_model_cache::CacheConfig;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Reads the process environment, after loading a `.env` file when one exists.
    ///
    /// - `PROJECTS_HTTP_ADDR` (default `0.0.0.0:8080`)
    /// - `PROJECTS_SUMMARY_TTL_SECS` (default 300)
    /// - `PROJECTS_VERSION_TTL_SECS` (default 30 days)
    /// - `PROJECTS_STALE_FALLBACK_SECS` (unset disables the stale fallback)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let http_addr = match parse::<SocketAddr>(&lookup, "PROJECTS_HTTP_ADDR")? {
            Some(addr) => addr,
            None => DEFAULT_HTTP_ADDR.parse().context("default http address")?,
        };

        let mut cache = CacheConfig::new();
        if let Some(secs) = parse::<u64>(&lookup, "PROJECTS_SUMMARY_TTL_SECS")? {
            cache = cache.with_ttl(Duration::from_secs(secs));
        }
        if let Some(secs) = parse::<u64>(&lookup, "PROJECTS_VERSION_TTL_SECS")? {
            cache = cache.with_version_ttl(Duration::from_secs(secs));
        }
        let stale = parse::<u64>(&lookup, "PROJECTS_STALE_FALLBACK_SECS")?;
        cache = cache.with_stale_fallback(stale.map(Duration::from_secs));

        cache.validate().map_err(|reason| anyhow!(reason))?;
        Ok(Self { http_addr, cache })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        _ => Ok(None),
    }
}
