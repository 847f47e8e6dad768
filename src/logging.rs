//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// log4rs config picked up from the working directory when present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Initialize logging from [`LOG_CONFIG_FILE`], or a stderr console logger at `level`.
///
/// With a config file the file decides the appenders; `level` still caps verbosity.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        log::set_max_level(level);
        log::debug!("Logging configured from {LOG_CONFIG_FILE}");
    } else {
        log4rs::init_config(console_config(level)?)?;
    }
    Ok(())
}

/// Console logger on stderr so stdout stays free for the summary.
pub fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config() {
        let config = console_config(LevelFilter::Debug).expect("Error building log config");
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
    }
}
