//! Walks a directory tree and writes its folders and `.txt`/`.csv`/`.xlsx`
//! files as a JSON array of nodes.

pub mod config;
pub mod node;
pub mod scan_directory_structure;
pub mod write_tree;

use config::Config;
use node::TreeStats;
use scan_directory_structure::{scan_directory_structure, ScanError};
use thiserror::Error;
use tracing::info;
use write_tree::{write_tree_json, WriteError};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Scans `config.start_dir` and writes the result to `config.output_file`.
///
/// The scan finishes before the output file is opened, so a failed scan
/// leaves any previous output untouched.
pub fn run(config: &Config) -> Result<TreeStats, GeneratorError> {
    info!("Scanning {}", config.start_dir.display());
    let tree = scan_directory_structure(&config.start_dir)?;
    let stats = TreeStats::collect(&tree);

    write_tree_json(&tree, &config.output_file)?;
    info!(
        folders = stats.folders,
        files = stats.files,
        "Wrote {}",
        config.output_file.display()
    );
    Ok(stats)
}
