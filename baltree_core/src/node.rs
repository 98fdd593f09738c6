use std::fmt;
use std::ops::Not;

use crate::tree::Tree;

pub(crate) type NodeId = usize;
pub(crate) const NIL: NodeId = usize::MAX;
/// Pseudo-id of the sentinel head used by the top-down delete.
/// Its right link is the root; it has no left link and no color.
pub(crate) const HEAD: NodeId = usize::MAX - 1;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Not for Dir {
    type Output = Dir;

    fn not(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) links: [NodeId; 2],
    pub(crate) parent: NodeId,
    pub(crate) color: Color,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            links: [NIL, NIL],
            parent: NIL,
            color: Color::Red,
        }
    }
}

/// Read-only view of a node stored in a [`Tree`].
///
/// A `NodeRef` borrows its tree, so the tree cannot be mutated while the
/// view (or any cursor built from it) is alive.
pub struct NodeRef<'a, T, C> {
    tree: &'a Tree<T, C>,
    id: NodeId,
}

impl<T, C> Clone for NodeRef<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for NodeRef<'_, T, C> {}

impl<'a, T, C> NodeRef<'a, T, C> {
    pub(crate) fn new(tree: &'a Tree<T, C>, id: NodeId) -> Self {
        debug_assert!(id < tree.nodes.len());
        Self { tree, id }
    }

    /// Wraps `id` unless it is [`NIL`].
    pub(crate) fn maybe(tree: &'a Tree<T, C>, id: NodeId) -> Option<Self> {
        (id != NIL).then(|| Self::new(tree, id))
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a T {
        &self.tree.nodes[self.id].value
    }

    pub fn color(&self) -> Color {
        self.tree.nodes[self.id].color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn left(&self) -> Option<Self> {
        Self::maybe(self.tree, self.tree.nodes[self.id].links[Dir::Left as usize])
    }

    pub fn right(&self) -> Option<Self> {
        Self::maybe(self.tree, self.tree.nodes[self.id].links[Dir::Right as usize])
    }

    pub fn parent(&self) -> Option<Self> {
        Self::maybe(self.tree, self.tree.nodes[self.id].parent)
    }

    /// The parent's other child.
    pub fn sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        if parent.left() == Some(*self) {
            parent.right()
        } else {
            parent.left()
        }
    }

    /// The parent's sibling.
    pub fn uncle(&self) -> Option<Self> {
        self.parent()?.sibling()
    }

    pub fn grandparent(&self) -> Option<Self> {
        self.parent()?.parent()
    }

    /// Height of the subtree rooted here, counted in nodes.
    pub fn depth(&self) -> usize {
        self.tree.subtree_depth(self.id)
    }

    /// In-order successor.
    pub fn next(&self) -> Option<Self> {
        Self::maybe(self.tree, self.tree.step(self.id, Dir::Right))
    }

    /// In-order predecessor.
    pub fn previous(&self) -> Option<Self> {
        Self::maybe(self.tree, self.tree.step(self.id, Dir::Left))
    }
}

impl<T, C> PartialEq for NodeRef<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T, C> Eq for NodeRef<'_, T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for NodeRef<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}
