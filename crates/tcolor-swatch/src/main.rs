// ABOUTME: Swatch entry point.
// ABOUTME: Loads the color config, applies overrides and prints the resolved color table.

mod swatch;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use tcolor_core::{ColorScheme, Config};

#[derive(Parser)]
#[command(name = "tcolor-swatch", version, about = "Print the resolved terminal color table")]
struct Cli {
    /// Config file to load instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use a built-in scheme (amber, green, white, ansi)
    #[arg(short, long)]
    scheme: Option<String>,

    /// Render bold text with the normal colors
    #[arg(long)]
    no_bold_bright: bool,

    /// Write the effective config back to disk
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::load_or_default(),
    };

    if let Some(name) = &cli.scheme {
        config.color_scheme = ColorScheme::preset(name).ok_or_else(|| {
            let known: Vec<String> = ColorScheme::presets().into_iter().map(|s| s.name).collect();
            anyhow!("Unknown color scheme {:?}, expected one of: {}", name, known.join(", "))
        })?;
    }
    if cli.no_bold_bright {
        config.bold_is_bright = false;
    }

    tracing::info!(
        "Using scheme {} (bold_is_bright={})",
        config.color_scheme.name,
        config.bold_is_bright
    );

    print!("{}", swatch::render(&config.color_table()));

    if cli.save {
        let path = match cli.config {
            Some(path) => {
                config.save(&path)?;
                path
            }
            None => config.save_to_default()?,
        };
        tracing::info!("Saved config to {}", path.display());
    }

    Ok(())
}
