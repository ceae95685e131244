// Path: crates/telemetry/src/init.rs
use hlink_types::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Default directive when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Resolves the filter from `RUST_LOG`, falling back to `info`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initializes the global `tracing` subscriber.
///
/// Records go to stderr so stdout stays reserved for rendered panels. `log`
/// records from dependencies are bridged in through `LogTracer`.
pub fn init_tracing(format: LogFormat) -> Result<(), anyhow::Error> {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_log::LogTracer::init()?;

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            let subscriber = Registry::default().with(filter).with(fmt_layer);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            let subscriber = Registry::default().with(filter).with(fmt_layer);
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}
