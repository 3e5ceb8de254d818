use clap::Parser;
use folio::core::config::{self, ConfigError, FolioConfig};
use folio::core::theme::Theme;
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Animated portfolio page for the terminal")]
struct Args {
    /// Config file (default: ~/.folio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme, overriding the saved preference
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Log file
    #[arg(long, default_value = "folio.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal itself belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let resolved = match config::load_config(args.config.as_deref())
        .and_then(|c| config::resolve(&c, args.theme))
    {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("folio: {}; using defaults", e);
            log::warn!("Config rejected, using defaults: {}", e);
            config::resolve(&FolioConfig::default(), args.theme).map_err(|e| {
                log::error!("Default config rejected: {}", e);
                match e {
                    ConfigError::Io(io) => io,
                    other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
                }
            })?
        }
    };

    log::info!(
        "Folio starting up: {} phrases, {} projects",
        resolved.content.phrases.len(),
        resolved.content.projects.len()
    );

    tui::run(resolved)
}
