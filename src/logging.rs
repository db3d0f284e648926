use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a level; warnings only by default.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the level when set.
pub fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    #[cfg(debug_assertions)]
    let builder = builder
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    // A subscriber may already be set when embedded in tests.
    let _ = builder.try_init();
}
