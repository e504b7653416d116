use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use homepage_market_data::{CsvQuoteProvider, QuoteSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub quote_source: Arc<dyn QuoteSource>,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub cache_control: HeaderValue,
}

/// Install the global subscriber. `RUST_LOG` wins over the debug flag.
pub fn init_tracing(config: &Config) {
    let level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Exactly one of these is Some.
    let (json, text) = match config.log_format {
        LogFormat::Json => (Some(fmt::layer().json().with_current_span(false)), None),
        LogFormat::Text => (None, Some(fmt::layer().with_target(true).with_line_number(true))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = CsvQuoteProvider::new(&config.quotes_url)?;
    tracing::info!("Quotes feed: {}", provider.base_url());
    build_state_with_source(config, Arc::new(provider))
}

/// Assemble state around an already constructed quote source.
pub fn build_state_with_source(
    config: &Config,
    quote_source: Arc<dyn QuoteSource>,
) -> anyhow::Result<Arc<AppState>> {
    let cache_control = HeaderValue::from_str(&format!("public, max-age={}", config.cache_max_age))
        .context("Invalid Cache-Control value")?;

    if config.cache_url.is_some() {
        tracing::info!("Cache store URL configured; quotes are still fetched per request");
    }
    tracing::debug!(
        "Templates: {}, static files: {}, bundles: {}",
        config.template_dir.display(),
        config.static_dir.display(),
        config.bundles_file.display()
    );

    Ok(Arc::new(AppState {
        quote_source,
        template_dir: config.template_dir.clone(),
        static_dir: config.static_dir.clone(),
        cache_control,
    }))
}
