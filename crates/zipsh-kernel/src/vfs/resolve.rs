//! Path resolution.

use super::error::{VfsError, VfsResult};
use super::node::{NodeId, Vfs};

impl Vfs {
    /// Resolve `path` to a node.
    ///
    /// Absolute paths start at the root, everything else at `cwd`. Empty
    /// segments are ignored, `.` stays put and `..` climbs one level (and is
    /// absorbed at the root). The lookup never creates nodes. On failure the
    /// error carries `path` exactly as given.
    pub fn resolve(&self, path: &str, cwd: NodeId) -> VfsResult<NodeId> {
        if path.is_empty() || path == "." {
            return Ok(cwd);
        }

        let mut current = if path.starts_with('/') { self.root() } else { cwd };
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match segment {
                "." => {}
                ".." => {
                    if let Some(parent) = self.parent(current) {
                        current = parent;
                    }
                }
                name => {
                    current = self
                        .get(current, name)
                        .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
                }
            }
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::vfs::{Node, Vfs, VfsError};

    fn sample() -> Vfs {
        let mut vfs = Vfs::new();
        let root = vfs.root();
        let a = vfs.add(root, Node::directory("a")).unwrap();
        let b = vfs.add(a, Node::directory("b")).unwrap();
        vfs.add(b, Node::file("f.txt", "data", false)).unwrap();
        vfs
    }

    #[test]
    fn test_empty_and_dot_resolve_to_cwd() {
        let vfs = sample();
        let a = vfs.resolve("/a", vfs.root()).unwrap();
        assert_eq!(vfs.resolve("", a), Ok(a));
        assert_eq!(vfs.resolve(".", a), Ok(a));
    }

    #[test]
    fn test_absolute_ignores_cwd() {
        let vfs = sample();
        let b = vfs.resolve("/a/b", vfs.root()).unwrap();
        let f = vfs.resolve("/a/b/f.txt", b).unwrap();
        assert_eq!(vfs.path(f), "/a/b/f.txt");
    }

    #[test]
    fn test_relative_from_cwd() {
        let vfs = sample();
        let a = vfs.resolve("/a", vfs.root()).unwrap();
        let f = vfs.resolve("b/f.txt", a).unwrap();
        assert_eq!(vfs.path(f), "/a/b/f.txt");
    }

    #[test]
    fn test_dotdot_at_root_is_absorbed() {
        let vfs = sample();
        let root = vfs.root();
        assert_eq!(vfs.resolve("..", root), Ok(root));
        assert_eq!(vfs.resolve("/../../a/../..", root), Ok(root));
    }

    #[test]
    fn test_repeated_and_trailing_slashes() {
        let vfs = sample();
        let b = vfs.resolve("//a///b/", vfs.root()).unwrap();
        assert_eq!(vfs.path(b), "/a/b");
    }

    #[test]
    fn test_not_found_carries_original_path() {
        let vfs = sample();
        let err = vfs.resolve("/a/nope/deeper", vfs.root()).unwrap_err();
        assert_eq!(err, VfsError::NotFound("/a/nope/deeper".into()));
        assert_eq!(err.to_string(), "No such file or directory: /a/nope/deeper");
    }

    #[test]
    fn test_cannot_descend_through_file() {
        let vfs = sample();
        let err = vfs.resolve("/a/b/f.txt/x", vfs.root()).unwrap_err();
        assert!(matches!(err, VfsError::NotFound(_)));
    }

    #[test]
    fn test_dotdot_out_of_file_is_allowed() {
        // `..` climbs even when the current node is a file.
        let vfs = sample();
        let b = vfs.resolve("/a/b/f.txt/..", vfs.root()).unwrap();
        assert_eq!(vfs.path(b), "/a/b");
    }
}
