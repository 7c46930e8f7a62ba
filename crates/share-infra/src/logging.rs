//! Tracing configuration for share normalization hosts
//!
//! Installs a `tracing-subscriber` fmt layer behind an `EnvFilter`. Hosts call
//! [`init_tracing_subscriber`] once, before the first share event arrives.

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the share crates
/// - **Production**: info level; resolver degradations still surface as warn
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("share_app={level}"),
        format!("share_core={level}"),
        format!("share_infra={level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// - **Environment filter**: respects `RUST_LOG`, falls back to
///   [`build_filter_directives`]
/// - **Output**: stdout, `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"share_app=debug".to_string()));
        assert!(dev_directives.contains(&"share_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"share_core=info".to_string()));
    }

    #[test]
    fn test_second_init_fails() {
        // First call may lose to another test that already installed a subscriber
        let _ = init_tracing_subscriber();
        assert!(init_tracing_subscriber().is_err());
    }
}
