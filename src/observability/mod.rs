//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → OtlpFileExporter → JSON lines
//! ```
//!
//! Spans are written as one OTLP JSON document per line to
//! `<data_dir>/shoppies-otlp.json`. The file rotates at 10 MB and keeps three
//! numbered backups.
//!
//! The trace level comes from the `trace_level` plugin option and defaults to
//! `info`. Any `EnvFilter` directive is accepted, for example
//! `shoppies=debug`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and OTLP JSON encoding
//! - `rotation`: Size-rotated append-only file

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
