use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Initialize logging on stderr.
///
/// `RUST_LOG` directives take precedence over the verbosity level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(verbosity_level: Option<Level>, json: bool) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(false)
    });

    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
    });

    let subscriber = Registry::default()
        .with(json_layer)
        .with(text_layer)
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
