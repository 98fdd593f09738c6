use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, LexicalKey, Lexicographic};
use crate::node::{Color, Dir, HEAD, NIL, Node, NodeId, NodeRef};

/// An ordered multiset kept balanced as a red-black tree.
///
/// Nodes live in an arena and refer to each other by index; the parent index
/// is a navigation aid only. The arena is kept dense (removal swaps the last
/// node into the freed slot), so its length is the number of stored values.
#[derive(Clone)]
pub struct Tree<T, C = Lexicographic> {
    pub(crate) root: NodeId,
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) comparator: C,
}

impl<T: LexicalKey> Tree<T, Lexicographic> {
    /// Creates an empty tree ordered by [`Lexicographic`].
    pub fn new() -> Self {
        Self::with_comparator(Lexicographic)
    }
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Tree<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: NIL,
            nodes: Vec::new(),
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest root-to-leaf path counted in nodes; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.subtree_depth(self.root)
    }

    pub fn clear(&mut self) {
        self.root = NIL;
        self.nodes.clear();
    }

    pub fn root(&self) -> Option<NodeRef<'_, T, C>> {
        NodeRef::maybe(self, self.root)
    }

    pub(crate) fn subtree_depth(&self, id: NodeId) -> usize {
        if id == NIL {
            return 0;
        }
        let [left, right] = self.nodes[id].links;
        1 + self.subtree_depth(left).max(self.subtree_depth(right))
    }

    /// Child of `id` on side `dir`. [`HEAD`] answers with the root on its right.
    pub(crate) fn link(&self, id: NodeId, dir: Dir) -> NodeId {
        match (id, dir) {
            (HEAD, Dir::Right) => self.root,
            (HEAD, Dir::Left) | (NIL, _) => NIL,
            _ => self.nodes[id].links[dir as usize],
        }
    }

    /// Hangs `child` under `id` on side `dir` and points the child back at
    /// its new parent. Linking under [`HEAD`] replaces the root.
    pub(crate) fn set_link(&mut self, id: NodeId, dir: Dir, child: NodeId) {
        let parent = if id == HEAD {
            debug_assert_eq!(dir, Dir::Right);
            self.root = child;
            NIL
        } else {
            self.nodes[id].links[dir as usize] = child;
            id
        };

        if child != NIL {
            self.nodes[child].parent = parent;
        }
    }

    /// Absent nodes count as black.
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        if id == NIL || id == HEAD {
            Color::Black
        } else {
            self.nodes[id].color
        }
    }

    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color_of(id) == Color::Red
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id != NIL && id != HEAD {
            self.nodes[id].color = color;
        }
    }

    /// Side of `parent` that `child` hangs on.
    pub(crate) fn side_of(&self, parent: NodeId, child: NodeId) -> Dir {
        if self.link(parent, Dir::Right) == child {
            Dir::Right
        } else {
            Dir::Left
        }
    }

    /// Stores `value` in a fresh, unlinked red node.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        self.nodes.push(Node::new(value));
        self.nodes.len() - 1
    }

    /// Drops an already unlinked node from the arena and returns its value.
    ///
    /// The last node of the arena takes over the slot, so every link that
    /// pointed at it is redirected to `id`.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(id);

        if id != last {
            let moved = &self.nodes[id];
            let (parent, [left, right]) = (moved.parent, moved.links);

            if parent == NIL {
                self.root = id;
            } else {
                let side = self.side_of(parent, last);
                self.nodes[parent].links[side as usize] = id;
            }
            for child in [left, right] {
                if child != NIL {
                    self.nodes[child].parent = id;
                }
            }
        }

        node.value
    }
}

impl<T, C: Comparator<T>> Tree<T, C> {
    pub(crate) fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparator.compare(a, b)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for Tree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Natural, Numbers};

    fn numbers(values: &[i32]) -> Tree<i32, Numbers> {
        let mut tree = Tree::with_comparator(Numbers);
        for v in values {
            tree.insert(*v);
        }
        tree
    }

    #[test]
    fn test_insert() {
        let tree = numbers(&[1, 3, 2, 5]);

        assert_eq!(tree.to_vec(), vec![1, 2, 3, 5]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth(), 3);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_delete() {
        let mut tree = numbers(&[1, 3, 2, 5]);

        assert!(tree.delete(&2));

        assert_eq!(tree.to_vec(), vec![1, 3, 5]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.depth(), 2);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_delete_non_existing_value() {
        let mut tree = numbers(&[1, 3, 2, 5]);

        assert!(!tree.delete(&6));

        assert_eq!(tree.to_vec(), vec![1, 2, 3, 5]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth(), 3);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_empty_tree() {
        let tree: Tree<i32, Natural> = Tree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.root().is_none());
        assert!(tree.is_valid());
    }

    #[test]
    fn test_clear() {
        let mut tree = numbers(&[4, 8, 15, 16, 23, 42]);
        tree.clear();

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.iter().count(), 0);

        tree.insert(7);
        assert_eq!(tree.to_vec(), vec![7]);
    }

    #[test]
    fn test_duplicates_accumulate() {
        let tree = numbers(&[5, 5, 1, 5, 9]);
        assert_eq!(tree.to_vec(), vec![1, 5, 5, 5, 9]);
        assert_eq!(tree.len(), 5);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_default_comparator_is_lexicographic() {
        let mut tree = Tree::new();
        for v in [10, 9, 1, 100] {
            tree.insert(v);
        }
        assert_eq!(tree.to_vec(), vec![1, 10, 100, 9]);
    }

    #[test]
    fn test_from_iterator_and_debug() {
        let tree: Tree<i32, Natural> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }

    #[test]
    fn test_release_keeps_arena_dense() {
        let mut tree = numbers(&(0..32).collect::<Vec<_>>());
        for v in (0..32).step_by(3) {
            assert!(tree.delete(&v));
            tree.validate().expect("valid after delete");
        }
        assert_eq!(tree.len(), tree.iter().count());
        assert_eq!(tree.nodes.len(), 32 - 11);
    }
}
