//! Logger initialization for the CLI binary.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Initialize the terminal logger.
///
/// Diagnostics go to stderr so the run summary on stdout stays clean for
/// pipelines that capture it.
pub fn init() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
