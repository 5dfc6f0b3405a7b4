use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Plain-text logs to stdout. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // Vercel stamps each line itself and does not render colour codes.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .try_init();
}
