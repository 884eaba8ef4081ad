use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use eyre::WrapErr;

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    Json,
    /// Human-readable lines for local development.
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(eyre::eyre!(
                "unsupported log format '{other}' (expected 'json' or 'pretty')"
            )),
        }
    }
}

/// Runtime settings, read once from the environment at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub static_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys take their
    /// defaults; set but unparsable values are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind = lookup("TIERCARE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid TIERCARE_BIND '{bind}'"))?;

        let static_dir = lookup("TIERCARE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let log_format = match lookup("TIERCARE_LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|e: eyre::Report| e.wrap_err("invalid TIERCARE_LOG_FORMAT"))?,
            None => LogFormat::Json,
        };

        Ok(Config {
            bind,
            static_dir,
            log_format,
        })
    }
}
