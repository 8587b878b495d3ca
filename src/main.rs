use anyhow::Result;
use clap::Parser;

mod config;
mod convert;
mod describe;
mod error;
mod pipeline;
mod rst;
mod sanitize;
mod ui;
mod version;

use convert::{MarkdownConverter, PandocConverter};
use describe::GitCli;
use pipeline::Orchestrator;
use version::Channel;

#[derive(clap::Parser)]
#[command(
    name = "dist-prep",
    about = "Resolve the package version and prepare the RST long description for distribution"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without writing any files")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("dist-prep {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Resolve the package version
    let channel = Channel::from_env();
    let resolved = match version::resolve_version(channel, &config, &GitCli) {
        Ok(v) => v,
        Err(e) => {
            ui::display_error(&format!("Version resolution failed: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_version_banner(channel, &resolved, &config.target_version);
    if let Some(location) = version::download_location(&config, &resolved) {
        ui::display_download_location(&location);
    }

    // Probe for the converter once; absence selects a fallback tier
    let converter: Option<Box<dyn MarkdownConverter>> = match PandocConverter::detect() {
        Ok(pandoc) => Some(Box::new(pandoc)),
        Err(e) => {
            ui::display_status(&format!("{}", e));
            None
        }
    };

    let orchestrator = Orchestrator::new(config, converter).with_dry_run(args.dry_run);
    match orchestrator.long_description() {
        Ok(description) => {
            ui::display_success(&format!(
                "Long description ready ({} bytes)",
                description.len()
            ));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Failed to produce long description: {}", e));
            std::process::exit(1);
        }
    }
}
