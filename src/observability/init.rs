//! Tracing initialization and subscriber setup.
//!
//! Wires `tracing` macros through an OpenTelemetry layer into the OTLP JSON
//! file exporter.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "shoppies-otlp.json";

const SERVICE_NAME: &str = "Shoppies";

/// Installs the global subscriber exporting spans to the data directory.
///
/// The pipeline:
/// 1. Filters spans with an `EnvFilter` built from the trace level
/// 2. Hands them to OpenTelemetry
/// 3. Writes each finished span as one OTLP JSON line
/// 4. Rotates the file at 10 MB, keeping three backups
///
/// # Parameters
///
/// * `config` - Plugin configuration; `trace_level` and `data_dir` are used
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set and parsable
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Returns without tracing if that fails; the plugin runs normally
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use shoppies::observability::init_tracing;
/// use shoppies::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: dir.path().to_path_buf(),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::create_tracer_provider(config.data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer));

    let _ = subscriber.try_init();
}
