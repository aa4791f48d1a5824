//! Command-line entry point for the demonstration binary.
//!
//! Every flag is optional and only affects logging; the report written to
//! stdout is the same for any combination of flags.

mod config;
mod logging;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig};
pub use logging::{LoggingError, init as init_logging};

use crate::demo;
use crate::error::Result;
use crate::logging::info;

/// Filter people by age using closures, function pointers and named functions.
#[derive(Parser, Debug, Default)]
#[command(name = "lambdas")]
#[command(about = "Filter people by age using closures, function pointers and named functions")]
pub struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter directive, overriding the configuration file.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format, overriding the configuration file.
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Args {
    /// Resolve the effective configuration: file (or defaults), then flags.
    pub fn load_config(&self) -> std::result::Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        Ok(config)
    }
}

/// Load configuration, install logging, and write the demonstration to `out`.
pub fn run<W: Write + ?Sized>(args: &Args, out: &mut W) -> Result<()> {
    let config = args.load_config()?;
    init_logging(&config.logging)?;

    let people = demo::sample_people();
    demo::run(out, &people)?;
    out.flush()?;

    info!("demonstration complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args {
            log_level: Some("debug".to_string()),
            log_format: Some(LogFormat::Json),
            ..Args::default()
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/lambdas.toml")),
            ..Args::default()
        };
        assert!(matches!(args.load_config(), Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["lambdas"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.log_format.is_none());
    }

    // The only test in the library that installs the global subscriber.
    #[test]
    fn test_write_failure_is_io_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = run(&Args::default(), &mut Broken).unwrap_err();
        assert!(err.is_io());
        assert!(!err.is_config());
    }
}
