use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One entry of the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Folder { name: String, children: Vec<Node> },
    /// `path` is relative to the scan root, not to the parent folder.
    File { name: String, path: String },
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Node::Folder { .. } => None,
            Node::File { path, .. } => Some(path),
        }
    }
}

// Written by hand so keys come out as name, type, then children/path.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 3)?;
        match self {
            Node::Folder { name, children } => {
                state.serialize_field("name", name)?;
                state.serialize_field("type", "folder")?;
                state.serialize_field("children", children)?;
            }
            Node::File { name, path } => {
                state.serialize_field("name", name)?;
                state.serialize_field("type", "file")?;
                state.serialize_field("path", path)?;
            }
        }
        state.end()
    }
}

/// Recursive folder/file counts over a scanned tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub folders: usize,
    pub files: usize,
}

impl TreeStats {
    pub fn collect(nodes: &[Node]) -> Self {
        let mut stats = Self::default();
        stats.add(nodes);
        stats
    }

    fn add(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Folder { children, .. } => {
                    self.folders += 1;
                    self.add(children);
                }
                Node::File { .. } => self.files += 1,
            }
        }
    }
}
