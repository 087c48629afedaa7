use std::env;
use tracing_subscriber::EnvFilter;

const DEBUG_ENV: &str = "SANAGA_DEBUG";

fn default_directive(sanaga_debug: Option<&str>) -> &'static str {
    match sanaga_debug {
        Some(value) if value.eq_ignore_ascii_case("true") || value == "1" => "debug",
        _ => "info",
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence,
/// otherwise `SANAGA_DEBUG=true` switches the default level from info to debug.
/// Output goes to stderr so stdout stays clean for command results.
pub fn init_logger() {
    let sanaga_debug = env::var(DEBUG_ENV).ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(sanaga_debug.as_deref())));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
