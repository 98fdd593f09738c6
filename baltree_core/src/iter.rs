use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::compare::Comparator;
use crate::node::{Dir, NIL, NodeId, NodeRef};
use crate::tree::Tree;

/// Ascending cursor over the nodes of a tree.
pub struct Nodes<'a, T, C> {
    tree: &'a Tree<T, C>,
    cursor: NodeId,
    remaining: usize,
}

impl<'a, T, C> Iterator for Nodes<'a, T, C> {
    type Item = NodeRef<'a, T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = NodeRef::maybe(self.tree, self.cursor)?;
        self.cursor = self.tree.step(self.cursor, Dir::Right);
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> ExactSizeIterator for Nodes<'_, T, C> {}
impl<T, C> FusedIterator for Nodes<'_, T, C> {}

/// Ascending iterator over stored values.
pub struct Iter<'a, T, C> {
    nodes: Nodes<'a, T, C>,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.nodes.next().map(|n| n.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}
impl<T, C> FusedIterator for Iter<'_, T, C> {}

/// Nodes between two bounds. Walks ascending when the bounds are given in
/// order and descending when they are reversed or equal.
pub struct NodesBetween<'a, T, C> {
    tree: &'a Tree<T, C>,
    cursor: NodeId,
    lower: &'a T,
    upper: &'a T,
    included: bool,
    dir: Dir,
}

impl<'a, T, C: Comparator<T>> Iterator for NodesBetween<'a, T, C> {
    type Item = NodeRef<'a, T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor != NIL {
            let id = self.cursor;
            let value = &self.tree.nodes[id].value;
            let below = self.tree.compare(self.lower, value);
            let above = self.tree.compare(self.upper, value);

            let on_bound = below == Ordering::Equal || above == Ordering::Equal;
            let inside = below == Ordering::Less && above == Ordering::Greater;
            let past = match self.dir {
                Dir::Right => above == Ordering::Less,
                Dir::Left => below == Ordering::Greater,
            };

            if (on_bound && self.included) || inside {
                self.cursor = self.tree.step(id, self.dir);
                return Some(NodeRef::new(self.tree, id));
            }
            if past {
                self.cursor = NIL;
                return None;
            }
            self.cursor = self.tree.step(id, self.dir);
        }

        None
    }
}

impl<T, C: Comparator<T>> FusedIterator for NodesBetween<'_, T, C> {}

/// Values between two bounds, see [`NodesBetween`].
pub struct Between<'a, T, C> {
    nodes: NodesBetween<'a, T, C>,
}

impl<'a, T, C: Comparator<T>> Iterator for Between<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.nodes.next().map(|n| n.value())
    }
}

impl<T, C: Comparator<T>> FusedIterator for Between<'_, T, C> {}

impl<T, C> Tree<T, C> {
    pub fn nodes(&self) -> Nodes<'_, T, C> {
        Nodes {
            tree: self,
            cursor: self.extreme(self.root, Dir::Left),
            remaining: self.len(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter { nodes: self.nodes() }
    }

    /// Clones the stored values in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Nodes from `lower` to `upper`, bounds kept when `included`.
    ///
    /// With `lower < upper` the walk is ascending from the in-order first
    /// node not below `lower`. Otherwise the bounds are swapped and the walk
    /// descends from the in-order last node not above the larger bound. Either way the same
    /// set of nodes comes out.
    pub fn nodes_between<'a>(
        &'a self,
        lower: &'a T,
        upper: &'a T,
        included: bool,
    ) -> NodesBetween<'a, T, C> {
        let (lower, upper, cursor, dir) = if self.compare(lower, upper) == Ordering::Less {
            let start = self.smallest_node_above(lower, true);
            (lower, upper, start, Dir::Right)
        } else {
            let start = self.biggest_node_under(lower, true);
            (upper, lower, start, Dir::Left)
        };

        NodesBetween {
            tree: self,
            cursor: cursor.map_or(NIL, |n| n.id()),
            lower,
            upper,
            included,
            dir,
        }
    }

    pub fn between<'a>(&'a self, lower: &'a T, upper: &'a T, included: bool) -> Between<'a, T, C> {
        Between {
            nodes: self.nodes_between(lower, upper, included),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Iter<'a, T, C> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::{Natural, Numbers};
    use crate::tree::Tree;

    fn sample() -> Tree<i32, Numbers> {
        let mut tree = Tree::with_comparator(Numbers);
        tree.extend([1, 3, 2, 5]);
        tree
    }

    #[test]
    fn test_iteration_is_ascending_and_restartable() {
        let tree = sample();
        let mut first = tree.iter();
        let second: Vec<_> = tree.iter().copied().collect();

        assert_eq!(first.len(), 4);
        assert_eq!(first.next(), Some(&1));
        assert_eq!(first.len(), 3);
        assert_eq!(second, vec![1, 2, 3, 5]);
        assert_eq!(first.copied().collect::<Vec<_>>(), vec![2, 3, 5]);

        let mut seen = Vec::new();
        for v in &tree {
            seen.push(*v);
        }
        assert_eq!(seen, second);
    }

    #[test]
    fn test_nodes_visit_every_node_once() {
        let mut tree = Tree::with_comparator(Natural);
        tree.extend((0..300).rev());
        let ids: Vec<_> = tree.nodes().map(|n| n.id()).collect();
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 300);
        assert_eq!(tree.nodes().count(), tree.len());
    }

    #[test]
    fn test_between_ascending() {
        let tree = sample();
        let inclusive: Vec<_> = tree.between(&2, &5, true).copied().collect();
        assert_eq!(inclusive, vec![2, 3, 5]);
        let exclusive: Vec<_> = tree.between(&2, &5, false).copied().collect();
        assert_eq!(exclusive, vec![3]);
        let loose: Vec<_> = tree.between(&0, &4, false).copied().collect();
        assert_eq!(loose, vec![1, 2, 3]);
    }

    #[test]
    fn test_between_reversed_bounds() {
        let tree = sample();
        let walked: Vec<_> = tree.between(&5, &1, true).copied().collect();
        assert_eq!(walked, vec![5, 3, 2, 1]);

        let mut as_set = walked.clone();
        as_set.sort_unstable();
        assert_eq!(as_set, vec![1, 2, 3, 5]);

        let exclusive: Vec<_> = tree.between(&5, &1, false).copied().collect();
        assert_eq!(exclusive, vec![3, 2]);
        let loose: Vec<_> = tree.between(&4, &0, true).copied().collect();
        assert_eq!(loose, vec![3, 2, 1]);
    }

    #[test]
    fn test_between_equal_bounds() {
        let tree = sample();
        assert_eq!(tree.between(&3, &3, true).copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(tree.between(&3, &3, false).count(), 0);
        assert_eq!(tree.between(&4, &4, true).count(), 0);
    }

    #[test]
    fn test_between_outside_range() {
        let tree = sample();
        assert_eq!(tree.between(&6, &9, true).count(), 0);
        assert_eq!(tree.between(&-9, &0, true).count(), 0);
        assert_eq!(tree.between(&9, &6, true).count(), 0);
    }

    #[test]
    fn test_between_repeated_bounds() {
        for copies in [2, 7, 20] {
            let mut tree = Tree::with_comparator(Natural);
            tree.extend(std::iter::repeat_n(1, copies));
            tree.insert(5);

            let forward: Vec<_> = tree.between(&1, &5, true).copied().collect();
            let mut backward: Vec<_> = tree.between(&5, &1, true).copied().collect();
            assert_eq!(backward.len(), copies + 1);
            backward.reverse();
            assert_eq!(forward, backward);
            assert_eq!(forward.iter().filter(|v| **v == 1).count(), copies);

            assert_eq!(tree.between(&1, &5, false).count(), 0);
            assert_eq!(tree.between(&1, &1, true).count(), copies);
            assert_eq!(tree.between(&0, &1, true).count(), copies);
        }

        let mut tree = Tree::with_comparator(Natural);
        tree.extend([4, 2, 4, 4, 6, 2, 8, 6, 4]);
        let inside: Vec<_> = tree.between(&2, &6, false).copied().collect();
        assert_eq!(inside, vec![4, 4, 4, 4]);
        let walked: Vec<_> = tree.between(&6, &2, true).copied().collect();
        assert_eq!(walked, vec![6, 6, 4, 4, 4, 4, 2, 2]);
    }

    #[test]
    fn test_nodes_between_yields_nodes() {
        let tree = sample();
        let colors: Vec<_> = tree
            .nodes_between(&1, &5, true)
            .map(|n| (*n.value(), n.color()))
            .collect();
        assert_eq!(colors.len(), 4);
        assert!(colors.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
