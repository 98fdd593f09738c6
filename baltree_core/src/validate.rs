use std::cmp::Ordering;

use thiserror::Error;

use crate::compare::Comparator;
use crate::node::{Color, Dir, NIL, NodeId};
use crate::tree::Tree;

/// A broken red-black or structural invariant. Node numbers are arena slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root node is red")]
    RedRoot,
    #[error("red node {node} has a red child")]
    RedRed { node: usize },
    #[error("black height below node {node} differs between sides ({left} vs {right})")]
    BlackHeight { node: usize, left: usize, right: usize },
    #[error("in-order sequence decreases at position {position}")]
    OutOfOrder { position: usize },
    #[error("node {node} records parent {recorded} but hangs under {actual}")]
    BrokenParent { node: usize, recorded: usize, actual: usize },
    #[error("{reachable} nodes are reachable from the root but {stored} are stored")]
    LengthMismatch { reachable: usize, stored: usize },
}

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Checks every red-black invariant plus parent links and ordering.
    /// Returns the black height of the root (0 for an empty tree).
    pub fn validate(&self) -> Result<usize, InvariantError> {
        self.check_links()?;

        if self.root == NIL {
            return Ok(0);
        }
        if self.nodes[self.root].color != Color::Black {
            return Err(InvariantError::RedRoot);
        }

        self.check_colors(self.root)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Structure only: parent links, reachable count and in-order sequence.
    pub(crate) fn check_links(&self) -> Result<(), InvariantError> {
        if self.root != NIL && self.nodes[self.root].parent != NIL {
            return Err(InvariantError::BrokenParent {
                node: self.root,
                recorded: self.nodes[self.root].parent,
                actual: NIL,
            });
        }

        let reachable = self.check_parents(self.root)?;
        if reachable != self.nodes.len() {
            return Err(InvariantError::LengthMismatch {
                reachable,
                stored: self.nodes.len(),
            });
        }

        let mut values = self.iter();
        if let Some(mut prev) = values.next() {
            for (position, value) in values.enumerate() {
                if self.compare(prev, value) == Ordering::Greater {
                    return Err(InvariantError::OutOfOrder { position: position + 1 });
                }
                prev = value;
            }
        }

        Ok(())
    }

    fn check_parents(&self, id: NodeId) -> Result<usize, InvariantError> {
        if id == NIL {
            return Ok(0);
        }

        let mut count = 1;
        for dir in [Dir::Left, Dir::Right] {
            let child = self.link(id, dir);
            if child == NIL {
                continue;
            }
            if self.nodes[child].parent != id {
                return Err(InvariantError::BrokenParent {
                    node: child,
                    recorded: self.nodes[child].parent,
                    actual: id,
                });
            }
            count += self.check_parents(child)?;
        }

        Ok(count)
    }

    /// No red-red pair and equal black heights; returns the black height of
    /// `id` counting `id` itself.
    fn check_colors(&self, id: NodeId) -> Result<usize, InvariantError> {
        if id == NIL {
            return Ok(0);
        }

        let (left, right) = (self.link(id, Dir::Left), self.link(id, Dir::Right));
        if self.is_red(id) && (self.is_red(left) || self.is_red(right)) {
            return Err(InvariantError::RedRed { node: id });
        }

        let left_height = self.check_colors(left)?;
        let right_height = self.check_colors(right)?;
        if left_height != right_height {
            return Err(InvariantError::BlackHeight {
                node: id,
                left: left_height,
                right: right_height,
            });
        }

        Ok(left_height + usize::from(self.color_of(id) == Color::Black))
    }
}
