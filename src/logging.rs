//! Logger setup.
//!
//! The interactive UI owns the terminal, so it logs to a file through log4rs.
//! Snapshot mode prints to stdout and logs to stderr through env_logger.

use anyhow::{Context, Result, anyhow, bail};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LoggingSettings;

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level `{}`", level))
}

/// Installs the file logger used while the terminal UI is running.
///
/// A `config` path that does not exist is rejected before any logger is
/// installed.
pub fn init_file_logging(settings: &LoggingSettings) -> Result<()> {
    if let Some(path) = &settings.config {
        if !path.exists() {
            bail!("log config not found: {}", path.display());
        }
        log4rs::init_file(path, Default::default())
            .with_context(|| format!("failed to load log config: {}", path.display()))?;
        return Ok(());
    }

    let config = file_config(settings)?;
    log4rs::init_config(config).map_err(|err| anyhow!("failed to install logger: {}", err))?;
    Ok(())
}

fn file_config(settings: &LoggingSettings) -> Result<Config> {
    let level = parse_level(&settings.level)?;
    let path = settings.file_path();
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(&path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))
        .context("invalid logger configuration")
}

/// Installs a stderr logger honoring `RUST_LOG`, falling back to `level`.
pub fn init_stderr_logging(level: &str) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {}", err))
}
