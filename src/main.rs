use std::fs::File;
use std::path::Path;

use clap::Parser;
use lists::cli::commands::Cli;
use lists::cli::handlers;
use lists::io::list_io::resolve_store_dir;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            let store_dir = match resolve_store_dir(cli.dir.as_deref().map(Path::new)) {
                Ok(dir) => dir,
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            };
            init_logger(&store_dir);
            log::info!("lists starting in {}", store_dir.display());
            if let Err(e) = lists::tui::run(Some(store_dir.as_path())) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// File logger in the store dir; swallowed I/O failures surface here only
fn init_logger(store_dir: &Path) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(store_dir.join("lists.log")) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
