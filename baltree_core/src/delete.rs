use std::cmp::Ordering;

use log::{debug, trace};

use crate::compare::Comparator;
use crate::node::{Color, Dir, HEAD, NIL};
use crate::tree::Tree;

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Removes one stored value equal to `value`. Returns `false`, leaving
    /// the tree untouched, when there is none. Which of several equal values
    /// goes is unspecified.
    ///
    /// The rebalancing is a single top-down pass: on the way down a red node
    /// is pushed ahead of the cursor, so the node finally unlinked is always
    /// red or has a red child and its removal never changes a black height.
    /// That pass recolors as it goes, so it only starts once a lookup has
    /// confirmed there is something to remove.
    pub fn delete(&mut self, value: &T) -> bool {
        if self.find(value).is_none() {
            debug!("delete: not found ({} values left)", self.len());
            return false;
        }

        let (mut grandparent, mut parent, mut current) = (NIL, NIL, HEAD);
        let mut found = NIL;
        let mut dir = Dir::Right;

        while self.link(current, dir) != NIL {
            let last = dir;

            grandparent = parent;
            parent = current;
            current = self.link(current, dir);

            let order = self.compare(&self.nodes[current].value, value);
            dir = match order {
                Ordering::Greater => Dir::Left,
                _ => Dir::Right,
            };
            if order == Ordering::Equal {
                found = current;
            }

            if self.is_red(current) || self.is_red(self.link(current, dir)) {
                continue;
            }

            if self.is_red(self.link(current, !dir)) {
                // Red child on the far side: lift it above the cursor.
                let promoted = self.rotate_single(current, dir);
                self.set_link(parent, last, promoted);
                parent = promoted;
                continue;
            }

            let sibling = self.link(parent, !last);
            if sibling == NIL {
                continue;
            }

            if !self.is_red(self.link(sibling, !last)) && !self.is_red(self.link(sibling, last)) {
                trace!("color flip at node {}", parent);
                self.set_color(parent, Color::Black);
                self.set_color(sibling, Color::Red);
                self.set_color(current, Color::Red);
            } else {
                // Borrow a node from the sibling's subtree.
                let side = self.side_of(grandparent, parent);
                let promoted = if self.is_red(self.link(sibling, last)) {
                    self.rotate_double(parent, last)
                } else {
                    self.rotate_single(parent, last)
                };
                self.set_link(grandparent, side, promoted);

                self.set_color(current, Color::Red);
                self.set_color(promoted, Color::Red);
                self.set_color(self.link(promoted, Dir::Left), Color::Black);
                self.set_color(self.link(promoted, Dir::Right), Color::Black);
            }
        }

        if found != NIL {
            let child_side = if self.link(current, Dir::Left) == NIL {
                Dir::Right
            } else {
                Dir::Left
            };
            let child = self.link(current, child_side);
            let side = self.side_of(parent, current);
            self.set_link(parent, side, child);

            if found != current {
                self.swap_values(found, current);
            }
            drop(self.release(current));
        }

        if self.root != NIL {
            self.nodes[self.root].color = Color::Black;
        }

        let removed = found != NIL;
        debug!("delete: removed {} ({} values left)", removed, self.len());
        removed
    }

    fn swap_values(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].value, &mut tail[0].value);
    }
}
