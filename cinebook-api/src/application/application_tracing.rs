use super::ApplicationEnv;
use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

///
/// Logs to console (level from `RUST_LOG`, debug by default)
/// and to hourly rotated file (info and above)
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    std::fs::create_dir_all(&env.log_directory)
        .with_context(|| format!("failed to create log directory {}", env.log_directory))?;

    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()?;
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::hourly(&env.log_directory, &env.log_filename);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(())
}
