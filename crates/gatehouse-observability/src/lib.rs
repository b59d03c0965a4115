//! # Gatehouse Observability
//!
//! Console logging for binaries built on the Gatehouse crates. Library code
//! only emits `tracing` events; installing a subscriber is left to the host.
//!
//! # Configuration
//!
//! - `RUST_LOG`: full filter directive, takes precedence when set
//! - `LOG_LEVEL`: level for Gatehouse targets when `RUST_LOG` is unset (default: `info`)
//! - `LOG_FORMAT`: `json` for one JSON object per line, anything else for compact text
//!
//! # Example
//!
//! ```no_run
//! gatehouse_observability::init_logging();
//! tracing::info!("ready");
//! ```

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_LEVEL: &str = "info";

const GATEHOUSE_TARGETS: [&str; 7] = [
    "gatehouse",
    "gatehouse_core",
    "gatehouse_config",
    "gatehouse_models",
    "gatehouse_auth",
    "gatehouse_policy",
    "gatehouse_observability",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse_or_default(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }

    pub fn from_env() -> Self {
        env::var("LOG_FORMAT")
            .map(|v| Self::parse_or_default(&v))
            .unwrap_or_default()
    }
}

/// Builds the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(log_level: Option<&str>) -> String {
    let level = log_level
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let mut directives: Vec<String> = GATEHOUSE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push("hyper=warn".to_string());
    directives.join(",")
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed, which leaves the
/// existing one in place.
pub fn init_logging() -> bool {
    let log_level = env::var("LOG_LEVEL").ok();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level.as_deref())));

    let format = LogFormat::from_env();

    let compact_layer = (format == LogFormat::Compact).then(|| {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
    });

    let json_layer = (format == LogFormat::Json).then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(compact_layer)
        .with(json_layer)
        .try_init()
        .is_ok()
}
