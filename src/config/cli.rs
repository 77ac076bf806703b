use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bike-qr")]
#[command(about = "Bike availability and QR booking redirect service")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, overrides `server.bind`
    #[arg(long)]
    pub bind: Option<String>,

    /// Base URL of the external booking system, overrides `booking.base_url`
    #[arg(long, env = "BOOK_URL")]
    pub book_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Print the routing decision for every bike and exit
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Loads the config file (or defaults) and applies command line overrides.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(bind) = &self.bind {
            tracing::info!("🔧 Bind address overridden to: {}", bind);
            config.server.bind = bind.clone();
        }
        if let Some(book_url) = &self.book_url {
            tracing::info!("🔧 Booking URL overridden to: {}", book_url);
            config.booking.base_url = book_url.clone();
        }

        Ok(config)
    }
}
