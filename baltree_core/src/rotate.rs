use log::trace;

use crate::node::{Color, Dir, NodeId};
use crate::tree::Tree;

impl<T, C> Tree<T, C> {
    /// Rotates the subtree at `root` toward `dir` and returns the promoted node.
    ///
    /// The child opposite `dir` takes `root`'s place, `root` becomes its
    /// `dir` child and the promoted node's inner subtree moves under `root`.
    /// The caller relinks the returned node into `root`'s former slot.
    pub(crate) fn rotate_single(&mut self, root: NodeId, dir: Dir) -> NodeId {
        let save = self.link(root, !dir);
        let inner = self.link(save, dir);
        let parent = self.nodes[root].parent;

        self.set_link(root, !dir, inner);
        self.set_link(save, dir, root);
        self.nodes[save].parent = parent;

        self.nodes[root].color = Color::Red;
        self.nodes[save].color = Color::Black;

        trace!("rotate {:?} at node {}: promoted node {}", dir, root, save);
        save
    }

    /// Resolves a zig-zag: first rotates the child opposite `dir` away from
    /// `dir`, then rotates `root` toward `dir`.
    pub(crate) fn rotate_double(&mut self, root: NodeId, dir: Dir) -> NodeId {
        let child = self.link(root, !dir);
        let promoted = self.rotate_single(child, !dir);
        self.set_link(root, !dir, promoted);

        self.rotate_single(root, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Natural;
    use crate::node::{HEAD, NIL};

    fn tree_of(values: &[i32]) -> Tree<i32, Natural> {
        let mut tree = Tree::with_comparator(Natural);
        tree.extend(values.iter().copied());
        tree
    }

    #[test]
    fn test_rotate_single_preserves_order() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let before = tree.to_vec();

        for dir in [Dir::Left, Dir::Right, Dir::Right, Dir::Left] {
            let promoted = tree.rotate_single(tree.root, dir);
            tree.set_link(HEAD, Dir::Right, promoted);

            assert_eq!(tree.to_vec(), before);
            tree.check_links().expect("links survive rotation");
        }
    }

    #[test]
    fn test_rotate_single_recolors() {
        let mut tree = tree_of(&[2, 1, 3]);
        let old_root = tree.root;

        let promoted = tree.rotate_single(old_root, Dir::Left);
        tree.set_link(HEAD, Dir::Right, promoted);

        assert_eq!(tree.nodes[promoted].value, 3);
        assert_eq!(tree.nodes[promoted].color, Color::Black);
        assert_eq!(tree.nodes[old_root].color, Color::Red);
        assert_eq!(tree.link(promoted, Dir::Left), old_root);
        assert_eq!(tree.nodes[old_root].parent, promoted);
    }

    #[test]
    fn test_rotate_double_lifts_inner_grandchild() {
        // 1 -> right 3 -> left 2 is a right-left zig-zag.
        let mut tree = tree_of(&[1]);
        let three = tree.alloc(3);
        let two = tree.alloc(2);
        tree.set_link(tree.root, Dir::Right, three);
        tree.set_link(three, Dir::Left, two);

        let promoted = tree.rotate_double(tree.root, Dir::Left);
        tree.set_link(HEAD, Dir::Right, promoted);

        assert_eq!(promoted, two);
        assert_eq!(tree.to_vec(), vec![1, 2, 3]);
        assert_eq!(tree.depth(), 2);
        tree.check_links().expect("links survive rotation");
    }

    #[test]
    fn test_rotate_deep_subtree_keeps_parent_links() {
        let mut tree = tree_of(&(0..64).collect::<Vec<_>>());
        let before = tree.to_vec();

        let target = tree
            .nodes()
            .find(|n| n.left().and_then(|l| l.right()).is_some())
            .map(|n| n.id())
            .expect("zig-zag candidate");
        let (parent, side) = match tree.nodes[target].parent {
            NIL => (HEAD, Dir::Right),
            parent => (parent, tree.side_of(parent, target)),
        };

        let promoted = tree.rotate_double(target, Dir::Right);
        tree.set_link(parent, side, promoted);

        assert_eq!(tree.to_vec(), before);
        tree.check_links().expect("links survive rotation");
    }
}
