//! # baltree_core - ordered multiset on a red-black tree
//!
//! Insertion repairs the tree on the way back up a recursive descent;
//! deletion rebalances during a single top-down pass, so it never needs a
//! second fix-up walk. Nodes live in an index arena with parent links for
//! O(log n) successor/predecessor steps.
//!
//! Modules:
//! - `compare` for the ordering policies
//! - `insert`, `delete` and `rotate` for the balancing algorithms
//! - `query` and `iter` for lookups, bounds and range walks
//! - `validate` for invariant checking

mod compare;
mod delete;
mod insert;
mod iter;
mod node;
mod query;
mod rotate;
mod tree;
mod validate;

#[cfg(test)]
mod properties;

pub use compare::{
    Comparator, LexicalKey, Lexicographic, Natural, Numbers, NumbersReversed, Strings,
    StringsReversed,
};
pub use iter::{Between, Iter, Nodes, NodesBetween};
pub use node::{Color, NodeRef};
pub use tree::Tree;
pub use validate::InvariantError;
