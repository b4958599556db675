//! Sentinel Dashboard - Main Entry Point
//!
//! Security camera monitoring dashboard.

use anyhow::Context;
use sentinel_dash::app::application::run_app;
use sentinel_dash::constants::LOG_FILE_PREFIX;
use sentinel_dash::domain::config::{AppConfig, LogConfig};
use sentinel_dash::fixtures::DashboardCharts;
use sentinel_dash::i18n::Locale;
use sentinel_dash::utils::{config_store, dirs};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Config first: it carries the log level
    let loaded = config_store::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let _log_guard = init_tracing(&config.log);
    if let Err(e) = &loaded {
        tracing::error!(error = %e, "Using default configuration");
    }

    tracing::info!("Starting Sentinel Dashboard...");

    let locale = resolve_locale(&config);
    rust_i18n::set_locale(locale.code());
    tracing::info!(locale = locale.code(), "Locale resolved");

    let charts = DashboardCharts::load().context("Failed to build chart fixtures")?;

    // Run the GPUI application
    run_app(config, locale, charts);
    Ok(())
}

/// Console output plus an optional daily rolling file
fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = if log.file_enabled {
        match dirs::log_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Log directory unavailable, file logging disabled: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn resolve_locale(config: &AppConfig) -> Locale {
    config
        .locale
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or_else(Locale::detect)
}
