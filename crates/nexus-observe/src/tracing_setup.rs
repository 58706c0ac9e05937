//! Process-wide log subscriber for the `nexus` binary.
//!
//! Log lines go to stderr through `tracing-subscriber`'s fmt layer. Every
//! closed span reports its busy and idle time, which is how per-request chat
//! latency shows up without extra instrumentation. With `--otel` the same
//! spans are also exported as OpenTelemetry traces to stdout.
//!
//! ```no_run
//! nexus_observe::init_tracing(false, "warn,nexus=info").unwrap();
//! // ... serve ...
//! nexus_observe::shutdown_tracing();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Instrumentation scope reported on exported spans.
const TRACER_NAME: &str = "nexus";

/// Kept so `shutdown_tracing` can flush spans still buffered at exit.
static OTEL_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// `RUST_LOG` wins when it parses; otherwise `fallback` (built from `-v`/`--quiet`).
fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(export_spans: bool, fallback_filter: &str) -> Result<(), InitError> {
    let filter = build_filter(fallback_filter);
    let log_lines = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);
    let registry = tracing_subscriber::registry().with(filter).with(log_lines);

    if !export_spans {
        registry.try_init()?;
        return Ok(());
    }

    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .build();
    let spans = tracing_opentelemetry::layer().with_tracer(provider.tracer(TRACER_NAME));
    registry.with(spans).try_init()?;

    let _ = OTEL_PROVIDER.set(provider.clone());
    opentelemetry::global::set_tracer_provider(provider);
    Ok(())
}

/// Flush exported spans. Does nothing when export was never enabled.
pub fn shutdown_tracing() {
    let Some(provider) = OTEL_PROVIDER.get() else {
        return;
    };
    if let Err(err) = provider.shutdown() {
        eprintln!("failed to flush trace export: {err}");
    }
}
