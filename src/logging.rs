//! log4rs setup.
//!
//! Configured in code only: warnings and above go to stderr, and no file is
//! read, so stdout carries only the summary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialise the global logger with a single stderr appender.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    log4rs::init_config(stderr_config(DEFAULT_LEVEL)?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
