//! wavelab - Fourier-series and amplitude-modulation visualizer
//!
//! Run with: cargo run -- --help

mod app;
mod cli;
mod ui;

use std::{fs::File, path::Path};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::App;
use cli::Args;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // stderr belongs to the terminal UI, so logs only go to a file
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut app = App::new(args.app_config());

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;

    Ok(())
}
