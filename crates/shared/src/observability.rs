//! # Observability
//!
//! Tracing initialisation and log output format selection.
//!
//! The `newsroom` binary writes its human-facing output to stdout, so every log
//! line goes to stderr. `LOG_FORMAT` switches between JSON and pretty output.

/// Log output format
///
/// Selected with the `LOG_FORMAT` environment variable.
/// Unset or unknown values fall back to [`Pretty`](LogFormat::Pretty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON lines, for machine consumption
    Json,
    /// Human readable output
    #[default]
    Pretty,
}

impl LogFormat {
    /// Parses a log format name
    ///
    /// Unknown values fall back to [`Pretty`](LogFormat::Pretty) with a
    /// warning on stderr (tracing is not initialised yet at this point).
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// Reads `LOG_FORMAT` from the environment
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Name of the running program, attached to the root span by the caller
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// Builds the configuration from `LOG_FORMAT`
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn,newsroom=info";

/// Initialises the global tracing subscriber
///
/// `RUST_LOG` controls the level; it defaults to [`DEFAULT_LOG_FILTER`].
///
/// JSON mode emits `timestamp`, `level`, `target` and `message` at the top
/// level, together with the fields of the current span. The
/// `tracing_error::ErrorLayer` lets infrastructure errors capture span traces.
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
