use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

use crate::config::{DEFAULT_CONFIG_PATH, Settings};
use crate::definitions::{LanguageCode, ThemeMode};

pub const USAGE: &str = "\
Usage: danstat [OPTIONS]

Options:
  --config <PATH>      settings file (default: config/danstat.toml)
  --lang <en|da>       initial display language
  --theme <light|dark> initial theme
  --snapshot [WxH]     print one rendered frame and exit (default 100x30)
  -h, --help           show this help";

pub const DEFAULT_SNAPSHOT_SIZE: (u16, u16) = (100, 30);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub language: Option<LanguageCode>,
    pub theme: Option<ThemeMode>,
    pub snapshot: Option<(u16, u16)>,
    pub help: bool,
}

impl CliOptions {
    /// Parses arguments, without the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().peekable();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "--config" => {
                    let value = args.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                    options.config = Some(PathBuf::from(value));
                }
                "--lang" => {
                    let value = args.next().ok_or_else(|| anyhow!("--lang needs a value"))?;
                    options.language = Some(value.parse()?);
                }
                "--theme" => {
                    let value = args.next().ok_or_else(|| anyhow!("--theme needs a value"))?;
                    options.theme = Some(value.parse()?);
                }
                "--snapshot" => {
                    let size = match args.peek() {
                        Some(next) if !next.starts_with('-') => {
                            let value = args.next().unwrap_or_default();
                            parse_size(&value)?
                        }
                        _ => DEFAULT_SNAPSHOT_SIZE,
                    };
                    options.snapshot = Some(size);
                }
                other => bail!("unknown argument `{}`\n\n{}", other, USAGE),
            }
        }
        Ok(options)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Command line values win over the settings file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(language) = self.language {
            settings.preferences.language = language;
        }
        if let Some(theme) = self.theme {
            settings.preferences.theme = theme;
        }
    }
}

fn parse_size(value: &str) -> Result<(u16, u16)> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("snapshot size must look like 100x30, got `{}`", value))?;
    let width = width
        .parse()
        .with_context(|| format!("invalid snapshot width `{}`", width))?;
    let height = height
        .parse()
        .with_context(|| format!("invalid snapshot height `{}`", height))?;
    Ok((width, height))
}
