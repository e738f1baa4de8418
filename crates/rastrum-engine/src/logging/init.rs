use std::sync::Once;

use log::LevelFilter;

/// How the studio (or any host) wants render diagnostics printed.
///
/// Filter resolution order: `env_filter`, then `RUST_LOG`, then
/// `fallback_level`. Filters use `env_logger` syntax, e.g.
/// `"rastrum_engine::raster=trace"` for per-triangle output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter string, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    fn resolved_filter(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger on the first call.
///
/// Returns `true` only for the call that installed it. Later calls, and a
/// host that already set its own logger, get `false`.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.resolved_filter() {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(config.fallback_level),
        };
        builder.write_style(config.write_style);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("rastrum logging initialized");
        }
    });
    installed
}
