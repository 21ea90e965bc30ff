use clap::Parser;
use puzzles::core::config::{self, CliOverrides, PendingLog, ResolvedConfig};
use puzzles::core::route::Route;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "puzzles", version, about = "Puzzle game menu shell")]
struct Args {
    /// Screen to open first
    #[arg(short, long, value_enum)]
    start_screen: Option<Route>,

    /// Config file to use instead of ~/.puzzles/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't capture the mouse (keyboard only)
    #[arg(long)]
    no_mouse: bool,
}

/// Returns `false` when no log file could be opened.
fn init_logging(config: &ResolvedConfig) -> bool {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&config.log_file) {
        Ok(log_file) => WriteLogger::init(config.log_level, log_config, log_file).is_ok(),
        Err(e) => {
            eprintln!(
                "puzzles: cannot open log file {}: {}",
                config.log_file.display(),
                e
            );
            false
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger needs the resolved config: everything until init is held back
    let mut pending = PendingLog::default();
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path, &mut pending),
        None => config::load_config(&mut pending),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        pending.push(log::Level::Warn, format!("{e}; using defaults"));
        Default::default()
    });

    let cli = CliOverrides {
        start_screen: args.start_screen,
        no_mouse: args.no_mouse,
    };
    let resolved = config::resolve(&file_config, &cli, &mut pending);
    if !init_logging(&resolved) {
        for warning in pending.warnings() {
            eprintln!("puzzles: {warning}");
        }
    }
    pending.replay();

    log::info!(
        "Puzzles starting on {} (mouse: {}, icons: {})",
        resolved.start_screen,
        resolved.mouse,
        resolved.icons
    );

    puzzles::tui::run(resolved)
}
