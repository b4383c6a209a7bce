use std::io::{self, IsTerminal};
use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{Layer, Registry};

static INIT: Once = Once::new();

/// Map the `VERBOSE` environment value (0..3) to a level. Unset or
/// unparsable values keep stderr to warnings and errors.
pub fn level_from_verbose(value: Option<&str>) -> LevelFilter {
    match value.and_then(|s| s.trim().parse::<u8>().ok()) {
        Some(0) => LevelFilter::ERROR,
        Some(1) => LevelFilter::INFO,
        Some(2) => LevelFilter::DEBUG,
        Some(3) => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

/// Install the stderr subscriber. Stdout stays reserved for the command.
pub fn init_logging() {
    INIT.call_once(|| {
        let level = level_from_verbose(std::env::var("VERBOSE").ok().as_deref());
        if let Err(e) = try_install(level) {
            eprintln!("curlgen: logging disabled, subscriber install failed: {e}");
        }
    });
}

fn try_install(level: LevelFilter) -> Result<(), TryInitError> {
    let human_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .with_filter(level);

    Registry::default().with(human_layer).try_init()
}
