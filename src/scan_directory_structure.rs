use crate::node::Node;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name suffixes kept in the tree. Matching is literal and case-sensitive.
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".txt", ".csv", ".xlsx"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not inside scan root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

pub fn is_allowed_file(name: &str) -> bool {
    ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Scans a directory recursively and returns its folders and allowed files
/// in directory-listing order.
pub fn scan_directory_structure<P: AsRef<Path>>(root: P) -> Result<Vec<Node>, ScanError> {
    let root = root.as_ref();
    scan_folder(root, root)
}

fn scan_folder(root: &Path, folder: &Path) -> Result<Vec<Node>, ScanError> {
    debug!("Scanning {}", folder.display());

    let read_dir_error = |source: io::Error| ScanError::ReadDir {
        path: folder.to_path_buf(),
        source,
    };

    let mut nodes = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            let children = scan_folder(root, &path)?;
            nodes.push(Node::Folder { name, children });
        } else if is_allowed_file(&name) {
            let relative = path
                .strip_prefix(root)
                .map_err(|_| ScanError::OutsideRoot {
                    path: path.clone(),
                    root: root.to_path_buf(),
                })?
                .to_string_lossy()
                .into_owned();
            nodes.push(Node::File {
                name,
                path: relative,
            });
        }
    }

    Ok(nodes)
}
