use std::cmp::Ordering;

use log::trace;

use crate::compare::Comparator;
use crate::node::{Color, Dir, HEAD, NIL, NodeId};
use crate::tree::Tree;

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Adds `value` as a new node. Equal values are kept side by side, each
    /// new one to the right of those already stored.
    pub fn insert(&mut self, value: T) {
        let root = self.insert_below(self.root, value);
        self.set_link(HEAD, Dir::Right, root);
        self.nodes[root].color = Color::Black;
    }

    /// Inserts into the subtree at `id` and returns the subtree's new root,
    /// repairing red-red violations on the way back up.
    fn insert_below(&mut self, id: NodeId, value: T) -> NodeId {
        if id == NIL {
            return self.alloc(value);
        }

        let dir = match self.compare(&self.nodes[id].value, &value) {
            Ordering::Greater => Dir::Left,
            _ => Dir::Right,
        };
        let child = self.insert_below(self.link(id, dir), value);
        self.set_link(id, dir, child);

        if !self.is_red(child) {
            return id;
        }

        let other = self.link(id, !dir);
        if self.is_red(other) {
            trace!("color flip at node {}", id);
            self.nodes[id].color = Color::Red;
            self.nodes[child].color = Color::Black;
            self.nodes[other].color = Color::Black;
            id
        } else if self.is_red(self.link(child, dir)) {
            self.rotate_single(id, !dir)
        } else if self.is_red(self.link(child, !dir)) {
            self.rotate_double(id, !dir)
        } else {
            id
        }
    }
}
