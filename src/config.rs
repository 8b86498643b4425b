/// Command line configuration
///
/// There is no config file and nothing is persisted: everything the
/// viewer needs comes from these flags or their defaults.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Bundled asset directory that image references resolve against
const DEFAULT_ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Browse the portfolio project catalog", long_about = None)]
#[command(version)]
pub struct Config {
    /// Location to open at startup, e.g. `/project?name=mira`
    #[arg(default_value = "/")]
    pub location: String,

    /// Directory image references are resolved against
    #[arg(long, default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
