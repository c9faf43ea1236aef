//! Logger initialization.
//!
//! The runtime only talks to the `log` facade; this module wires up
//! `env_logger` for binaries that want it.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "ewui_runtime=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Map a repeated `-v` count onto a filter: 0 → warn, 1 → info,
    /// 2 → debug, 3+ → trace.
    pub fn from_verbosity(count: u8) -> Self {
        let level = match count {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self { env_filter: Some(level.to_string()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. `RUST_LOG` is consulted only
/// when the config carries no filter.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LoggingConfig::from_verbosity(0).env_filter.as_deref(), Some("warn"));
        assert_eq!(LoggingConfig::from_verbosity(2).env_filter.as_deref(), Some("debug"));
        assert_eq!(LoggingConfig::from_verbosity(9).env_filter.as_deref(), Some("trace"));
    }
}
