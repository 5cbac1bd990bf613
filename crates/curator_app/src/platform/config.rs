use std::time::Duration;

use clap::{Parser, ValueEnum};
use curator_core::{SyncSettings, DEFAULT_BASE_PATH, DEFAULT_CACHE_CAPACITY};
use curator_logging::LogDestination;
use log::LevelFilter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "curator",
    version,
    about = "Browse curated learning resources from the terminal"
)]
pub struct Cli {
    /// Root of the directory API.
    #[arg(long, env = "CURATOR_API_URL", default_value = "http://localhost:3000/api")]
    pub api_url: String,

    /// Root of the auth service; defaults to `<api-url>/auth`.
    #[arg(long, env = "CURATOR_AUTH_URL")]
    pub auth_url: Option<String>,

    /// Path of the browse page, used as the base of synced addresses.
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    pub path: String,

    /// Initial query string, e.g. `?category=DSA&tag=arrays`.
    #[arg(long, default_value = "")]
    pub query: String,

    /// Quiet period before filter changes are synced.
    #[arg(long, default_value_t = 500)]
    pub quiet_ms: u64,

    /// Resource lists kept for instant re-display; 0 disables the cache.
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_entries: usize,

    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl Cli {
    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            quiet_period: Duration::from_millis(self.quiet_ms),
            base_path: self.path.clone(),
            cache_capacity: self.cache_entries,
            ..SyncSettings::default()
        }
    }

    pub fn auth_url(&self) -> String {
        self.auth_url
            .clone()
            .unwrap_or_else(|| format!("{}/auth", self.api_url.trim_end_matches('/')))
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
