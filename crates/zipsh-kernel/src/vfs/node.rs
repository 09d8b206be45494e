//! Arena-backed directory tree.
//!
//! Every node lives in a slot of [`Vfs`] and is addressed by a [`NodeId`].
//! Directories own their children through the `children` map; children point
//! back at their directory through a plain index, so there is no ownership
//! cycle between the two.

use std::collections::BTreeMap;

use super::error::{VfsError, VfsResult};

/// Default mode for directories.
pub const DIR_MODE: u32 = 0o755;
/// Default mode for files.
pub const FILE_MODE: u32 = 0o644;

/// Handle to a node in a [`Vfs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// File or directory payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File {
        content: Vec<u8>,
        /// True when the content was base64-decoded during ingestion.
        is_binary: bool,
    },
    Directory {
        /// Sorted by name, so listings come out in ordinal order.
        children: BTreeMap<String, NodeId>,
    },
}

/// A single entry in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    /// Permission bits. Stored, displayed, never enforced.
    pub perms: u32,
    parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    /// Create an empty directory with default permissions.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            perms: DIR_MODE,
            parent: None,
            kind: NodeKind::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    /// Create a file with default permissions.
    pub fn file(name: impl Into<String>, content: impl Into<Vec<u8>>, is_binary: bool) -> Self {
        Self {
            name: name.into(),
            perms: FILE_MODE,
            parent: None,
            kind: NodeKind::File {
                content: content.into(),
                is_binary,
            },
        }
    }

    /// The owning directory, or `None` for the root and detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_binary(&self) -> bool {
        matches!(self.kind, NodeKind::File { is_binary: true, .. })
    }

    /// File content; `None` for directories.
    pub fn content(&self) -> Option<&[u8]> {
        match &self.kind {
            NodeKind::File { content, .. } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Size in bytes (0 for directories).
    pub fn size(&self) -> usize {
        self.content().map_or(0, <[u8]>::len)
    }
}

/// The in-memory filesystem.
#[derive(Debug, Clone)]
pub struct Vfs {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vfs {
    /// Create a tree holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::directory(""))],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// True if `id` refers to a node that is still part of the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0), Some(Some(_)))
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root).next().is_none()
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was dropped from the tree.
    pub fn node(&self, id: NodeId) -> &Node {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node id {}", id.0),
        }
    }

    /// Mutably borrow a node. Same panics as [`Vfs::node`].
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node id {}", id.0),
        }
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.node(id).is_dir()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Look up a direct child of `dir` by exact name.
    pub fn get(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        match &self.node(dir).kind {
            NodeKind::Directory { children } => children.get(name).copied(),
            NodeKind::File { .. } => None,
        }
    }

    /// Children of `dir` in sorted-name order. Empty for files.
    pub fn children(&self, dir: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        let children = match &self.node(dir).kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        };
        children
            .into_iter()
            .flat_map(|c| c.iter().map(|(name, id)| (name.as_str(), *id)))
    }

    /// Insert `node` under `dir`, replacing (and dropping) any entry that
    /// already uses the same name.
    pub fn add(&mut self, dir: NodeId, node: Node) -> VfsResult<NodeId> {
        if !self.is_dir(dir) {
            return Err(VfsError::NotADirectory(self.path(dir)));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(node));
        self.attach(dir, id);
        Ok(id)
    }

    /// Overwrite a node's permission bits.
    pub fn set_perms(&mut self, id: NodeId, perms: u32) {
        self.node_mut(id).perms = perms;
    }

    /// Absolute path of a node. The root is `/`.
    pub fn path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            parts.push(self.node(current).name.as_str());
            current = parent;
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }

    /// True if `ancestor` is `id` itself or one of its parents.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Relocate `src` into `dest_dir` under `name`.
    ///
    /// The node is detached from its current parent first, then attached to
    /// the destination, replacing whatever held `name` there. Moving a
    /// directory into its own subtree is rejected.
    pub fn move_node(&mut self, src: NodeId, dest_dir: NodeId, name: &str) -> VfsResult<()> {
        let Some(old_parent) = self.parent(src) else {
            return Err(VfsError::MoveRoot);
        };
        if !self.is_dir(dest_dir) {
            return Err(VfsError::NotADirectory(self.path(dest_dir)));
        }
        if self.is_ancestor(src, dest_dir) {
            return Err(VfsError::MoveIntoSelf(self.path(src)));
        }

        let old_name = self.node(src).name.clone();
        if let NodeKind::Directory { children } = &mut self.node_mut(old_parent).kind {
            if children.get(&old_name) == Some(&src) {
                children.remove(&old_name);
            }
        }
        self.node_mut(src).parent = None;
        self.node_mut(src).name = name.to_string();
        self.attach(dest_dir, src);
        tracing::debug!(from = %old_name, to = %self.path(src), "moved node");
        Ok(())
    }

    fn attach(&mut self, dir: NodeId, id: NodeId) {
        let name = self.node(id).name.clone();
        let replaced = match &mut self.node_mut(dir).kind {
            NodeKind::Directory { children } => children.insert(name, id),
            NodeKind::File { .. } => None,
        };
        self.node_mut(id).parent = Some(dir);
        if let Some(old) = replaced.filter(|old| *old != id) {
            self.drop_subtree(old);
        }
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(Some(node)) = self.nodes.get_mut(current.0).map(Option::take) {
                if let NodeKind::Directory { children } = node.kind {
                    stack.extend(children.into_values());
                }
            }
        }
    }
}
