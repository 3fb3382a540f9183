use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so table and JSON output on stdout stay clean.
/// `TICKWATCH_LOG_FORMAT=json` switches to one JSON object per line;
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let json = std::env::var("TICKWATCH_LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
