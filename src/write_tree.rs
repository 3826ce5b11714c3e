use crate::node::Node;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write JSON to {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders the tree as a 2-space indented JSON array. Non-ASCII text is kept as is.
pub fn to_json_string(nodes: &[Node]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}

/// Writes the tree to `output`, replacing whatever was there.
pub fn write_tree_json<P: AsRef<Path>>(nodes: &[Node], output: P) -> Result<(), WriteError> {
    let output = output.as_ref();
    debug!("Writing {} top-level nodes to {}", nodes.len(), output.display());

    let file = File::create(output).map_err(|source| WriteError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, nodes).map_err(|source| WriteError::Serialize {
        path: output.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| WriteError::Flush {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> Vec<Node> {
        vec![
            Node::File {
                name: "a.txt".to_string(),
                path: "a.txt".to_string(),
            },
            Node::Folder {
                name: "sub".to_string(),
                children: vec![Node::File {
                    name: "c.csv".to_string(),
                    path: "sub/c.csv".to_string(),
                }],
            },
        ]
    }

    #[test]
    fn empty_tree_is_an_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn pretty_prints_with_two_space_indent() {
        let expected = r#"[
  {
    "name": "a.txt",
    "type": "file",
    "path": "a.txt"
  },
  {
    "name": "sub",
    "type": "folder",
    "children": [
      {
        "name": "c.csv",
        "type": "file",
        "path": "sub/c.csv"
      }
    ]
  }
]"#;
        assert_eq!(to_json_string(&sample_tree()).unwrap(), expected);
    }

    #[test]
    fn non_ascii_names_are_not_escaped() {
        let tree = vec![Node::File {
            name: "отчёт.csv".to_string(),
            path: "данные/отчёт.csv".to_string(),
        }];
        let json = to_json_string(&tree).unwrap();
        assert!(json.contains("\"отчёт.csv\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("files.json");
        fs::write(&output, "stale content that is longer than the new document").unwrap();

        write_tree_json(&[], &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
    }

    #[test]
    fn file_matches_in_memory_rendering() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("files.json");
        let tree = sample_tree();

        write_tree_json(&tree, &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            to_json_string(&tree).unwrap()
        );
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("missing").join("files.json");
        assert!(matches!(
            write_tree_json(&[], &output),
            Err(WriteError::Create { .. })
        ));
    }
}
