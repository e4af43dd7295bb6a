//! File Tree Manager - Entry Point
//!
//! An in-memory hierarchical file store driven through a small command shell.

use log::{error, info};
use tokio::io::BufReader;

use file_tree_manager::config::AppConfig;
use file_tree_manager::shell::{Shell, run_demo};
use file_tree_manager::utils::logging::setup_logging;
use file_tree_manager::{FileManager, FileStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG still overrides the configured filter
    setup_logging(&config.log_filter);

    info!("Launching file tree shell...");

    let mut storage = FileStorage::new();
    let mut shell = Shell::new(FileManager::new(&mut storage), &config);
    let mut stdout = tokio::io::stdout();

    if config.run_demo {
        if let Err(e) = run_demo(&mut shell, &mut stdout).await {
            error!("Demo script failed: {}", e);
        }
    }

    if config.interactive {
        let stdin = BufReader::new(tokio::io::stdin());
        if let Err(e) = shell.run(stdin, &mut stdout).await {
            error!("Shell stopped: {}", e);
        }
    }

    info!("File tree shell closed");
}
