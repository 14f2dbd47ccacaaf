//! Logger setup for the CLI.

use std::io::Write;

use log::LevelFilter;

/// Map the `-v` count to a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` takes precedence over `verbose`.
pub fn configure_logger(verbose: u8) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .init();
}
