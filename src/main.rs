use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use giftmart::config::Config;
use giftmart::{logging, ui};

/// Terminal storefront for a digital gift-card marketplace.
#[derive(Debug, Parser)]
#[command(name = "giftmart", version)]
struct Cli {
    /// Path to an explicit config file (default: the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Startup path, e.g. "/explore". Unknown paths open the home view.
    #[arg(long, default_value = "/")]
    path: String,

    /// Override the marketplace API base URL from the config.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init().context("initializing logging")?;
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("validating --base-url override")?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    ui::run(&config, &cli.path, runtime.handle().clone())
}
