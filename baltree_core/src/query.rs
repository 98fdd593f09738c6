use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::node::{Dir, NIL, NodeId, NodeRef};
use crate::tree::Tree;

impl<T, C> Tree<T, C> {
    /// In-order neighbour of `id` on side `dir` (`Right` for the successor).
    pub(crate) fn step(&self, id: NodeId, dir: Dir) -> NodeId {
        let child = self.link(id, dir);
        if child != NIL {
            return self.extreme(child, !dir);
        }

        let mut node = id;
        let mut parent = self.nodes[node].parent;
        while parent != NIL && self.link(parent, dir) == node {
            node = parent;
            parent = self.nodes[node].parent;
        }
        parent
    }

    /// Walks from `id` as far as possible toward `dir`.
    pub(crate) fn extreme(&self, mut id: NodeId, dir: Dir) -> NodeId {
        if id == NIL {
            return NIL;
        }
        while self.link(id, dir) != NIL {
            id = self.link(id, dir);
        }
        id
    }

    pub fn first_node(&self) -> Option<NodeRef<'_, T, C>> {
        NodeRef::maybe(self, self.extreme(self.root, Dir::Left))
    }

    pub fn last_node(&self) -> Option<NodeRef<'_, T, C>> {
        NodeRef::maybe(self, self.extreme(self.root, Dir::Right))
    }

    pub fn first(&self) -> Option<&T> {
        self.first_node().map(|n| n.value())
    }

    pub fn last(&self) -> Option<&T> {
        self.last_node().map(|n| n.value())
    }

    /// In-order successor of `node`, which must belong to this tree.
    pub fn next<'a>(&'a self, node: NodeRef<'a, T, C>) -> Option<NodeRef<'a, T, C>> {
        NodeRef::maybe(self, self.step(node.id(), Dir::Right))
    }

    /// In-order predecessor of `node`, which must belong to this tree.
    pub fn previous<'a>(&'a self, node: NodeRef<'a, T, C>) -> Option<NodeRef<'a, T, C>> {
        NodeRef::maybe(self, self.step(node.id(), Dir::Left))
    }
}

impl<T, C: Comparator<T>> Tree<T, C> {
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T, C>> {
        let mut node = self.root;

        while node != NIL {
            match self.compare(&self.nodes[node].value, value) {
                Ordering::Equal => return Some(NodeRef::new(self, node)),
                Ordering::Greater => node = self.link(node, Dir::Left),
                Ordering::Less => node = self.link(node, Dir::Right),
            }
        }

        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Greatest node below `bound`, or equal to it when `included`.
    ///
    /// Among equal values the last one in order is returned, and an
    /// excluded bound skips every copy of itself.
    pub fn biggest_node_under(&self, bound: &T, included: bool) -> Option<NodeRef<'_, T, C>> {
        let mut biggest = NIL;
        let mut node = self.root;

        while node != NIL {
            let fits = match self.compare(&self.nodes[node].value, bound) {
                Ordering::Less => true,
                Ordering::Equal => included,
                Ordering::Greater => false,
            };
            if fits {
                biggest = node;
                node = self.link(node, Dir::Right);
            } else {
                node = self.link(node, Dir::Left);
            }
        }

        NodeRef::maybe(self, biggest)
    }

    /// Smallest node above `bound`, or equal to it when `included`.
    ///
    /// Among equal values the first one in order is returned.
    pub fn smallest_node_above(&self, bound: &T, included: bool) -> Option<NodeRef<'_, T, C>> {
        let mut smallest = NIL;
        let mut node = self.root;

        while node != NIL {
            let fits = match self.compare(&self.nodes[node].value, bound) {
                Ordering::Greater => true,
                Ordering::Equal => included,
                Ordering::Less => false,
            };
            if fits {
                smallest = node;
                node = self.link(node, Dir::Left);
            } else {
                node = self.link(node, Dir::Right);
            }
        }

        NodeRef::maybe(self, smallest)
    }

    /// The first node, provided it lies below `bound` (or on it when `included`).
    pub fn smallest_node_under(&self, bound: &T, included: bool) -> Option<NodeRef<'_, T, C>> {
        self.first_node().filter(|n| match self.compare(n.value(), bound) {
            Ordering::Less => true,
            Ordering::Equal => included,
            Ordering::Greater => false,
        })
    }

    /// The last node, provided it lies above `bound` (or on it when `included`).
    pub fn biggest_node_above(&self, bound: &T, included: bool) -> Option<NodeRef<'_, T, C>> {
        self.last_node().filter(|n| match self.compare(n.value(), bound) {
            Ordering::Greater => true,
            Ordering::Equal => included,
            Ordering::Less => false,
        })
    }

    /// Nearest nodes strictly below and strictly above `bound`: where
    /// `bound` would sit if it were inserted.
    pub fn closest_nodes(
        &self,
        bound: &T,
    ) -> (Option<NodeRef<'_, T, C>>, Option<NodeRef<'_, T, C>>) {
        (
            self.biggest_node_under(bound, false),
            self.smallest_node_above(bound, false),
        )
    }

    pub fn biggest_under(&self, bound: &T, included: bool) -> Option<&T> {
        self.biggest_node_under(bound, included).map(|n| n.value())
    }

    pub fn biggest_under_or<'a>(&'a self, bound: &T, included: bool, default: &'a T) -> &'a T {
        self.biggest_under(bound, included).unwrap_or(default)
    }

    pub fn smallest_above(&self, bound: &T, included: bool) -> Option<&T> {
        self.smallest_node_above(bound, included).map(|n| n.value())
    }

    pub fn smallest_above_or<'a>(&'a self, bound: &T, included: bool, default: &'a T) -> &'a T {
        self.smallest_above(bound, included).unwrap_or(default)
    }

    pub fn smallest_under(&self, bound: &T, included: bool) -> Option<&T> {
        self.smallest_node_under(bound, included).map(|n| n.value())
    }

    pub fn biggest_above(&self, bound: &T, included: bool) -> Option<&T> {
        self.biggest_node_above(bound, included).map(|n| n.value())
    }

    pub fn closest(&self, bound: &T) -> (Option<&T>, Option<&T>) {
        let (under, above) = self.closest_nodes(bound);
        (under.map(|n| n.value()), above.map(|n| n.value()))
    }
}
