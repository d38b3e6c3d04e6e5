//! wordboard - an interactive word-grid game for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use wordboard_app::load_settings;
use wordboard_core::logging;

/// wordboard - place words on a grid, one tile at a time
#[derive(Parser, Debug)]
#[command(name = "wordboard")]
#[command(about = "An interactive word-grid board game for the terminal", long_about = None)]
struct Args {
    /// Board edge length in cells (overrides the config file)
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// Directory holding .wordboard/config.toml (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let config_base = args
        .config_dir
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut settings = load_settings(&config_base);
    if let Some(size) = args.size {
        settings.board.size = size;
    }

    wordboard_tui::run(&settings)?;
    Ok(())
}
