use proptest::prelude::*;

use crate::compare::Natural;
use crate::node::{Dir, HEAD, NIL};
use crate::tree::Tree;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Delete(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..64i32).prop_map(Op::Insert),
        2 => (0..64i32).prop_map(Op::Delete),
    ]
}

fn tree_of(values: impl IntoIterator<Item = i32>) -> Tree<i32, Natural> {
    let mut tree = Tree::with_comparator(Natural);
    tree.extend(values);
    tree
}

fn depth_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

proptest! {
    /// Apply random inserts and deletes against a sorted-vector model.
    #[test]
    fn prop_matches_sorted_model(ops in prop::collection::vec(op(), 0..400)) {
        let mut tree = Tree::with_comparator(Natural);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    tree.insert(v);
                    let at = model.partition_point(|x| *x <= v);
                    model.insert(at, v);
                }
                Op::Delete(v) => {
                    let before = tree.len();
                    let removed = tree.delete(&v);
                    match model.binary_search(&v) {
                        Ok(at) => {
                            prop_assert!(removed);
                            prop_assert_eq!(tree.len(), before - 1);
                            model.remove(at);
                        }
                        Err(_) => {
                            prop_assert!(!removed);
                            prop_assert_eq!(tree.len(), before);
                        }
                    }
                    prop_assert_eq!(tree.contains(&v), model.binary_search(&v).is_ok());
                }
            }

            prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
            prop_assert_eq!(tree.len(), tree.iter().count());
            prop_assert!(tree.depth() as f64 <= depth_bound(tree.len()));
        }

        prop_assert_eq!(tree.to_vec(), model);
    }

    /// Deleting everything, in any order, empties the tree.
    #[test]
    fn prop_insert_then_delete_all(
        (values, order) in prop::collection::vec(any::<i16>(), 0..300)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let mut tree = Tree::with_comparator(Natural);
        tree.extend(values.iter().copied());
        prop_assert_eq!(tree.len(), values.len());

        for v in &order {
            prop_assert!(tree.delete(v));
            prop_assert!(tree.is_valid());
        }

        prop_assert!(tree.is_empty());
        prop_assert!(tree.root().is_none());
        prop_assert_eq!(tree.depth(), 0);
    }

    /// A failed delete leaves the shape untouched, even among many duplicates.
    #[test]
    fn prop_delete_absent_is_noop(
        values in prop::collection::vec((0..20i32).prop_map(|v| v * 2), 0..200),
        probe in (-1..21i32).prop_map(|v| v * 2 + 1),
    ) {
        let mut tree = tree_of(values);
        let shape: Vec<_> = tree.nodes().map(|n| (*n.value(), n.color(), n.depth())).collect();

        prop_assert!(!tree.delete(&probe));

        let after: Vec<_> = tree.nodes().map(|n| (*n.value(), n.color(), n.depth())).collect();
        prop_assert_eq!(shape, after);
    }

    /// Reversed bounds walk the other way over the same values, duplicates included.
    #[test]
    fn prop_between_is_symmetric(
        mut values in prop::collection::vec(-30..30i32, 0..120),
        a in -35..35i32,
        b in -35..35i32,
        included: bool,
    ) {
        let tree = tree_of(values.iter().copied());
        values.sort_unstable();

        let forward: Vec<i32> = tree.between(&a, &b, included).copied().collect();
        let mut backward: Vec<i32> = tree.between(&b, &a, included).copied().collect();
        backward.sort_unstable();
        let mut forward_sorted = forward.clone();
        forward_sorted.sort_unstable();
        prop_assert_eq!(&forward_sorted, &backward);

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let expected: Vec<i32> = values
            .iter()
            .copied()
            .filter(|v| if included { lo <= *v && *v <= hi } else { lo < *v && *v < hi })
            .collect();
        prop_assert_eq!(forward_sorted, expected);
    }

    /// Bound queries agree with a linear scan over the sorted values.
    #[test]
    fn prop_bounds_match_scan(
        mut values in prop::collection::vec(-60..60i32, 0..150),
        bound in -65..65i32,
        included: bool,
    ) {
        let tree = tree_of(values.iter().copied());
        values.sort_unstable();
        let sorted = &values;

        let under = sorted.iter().rev().find(|v| **v < bound || (included && **v == bound));
        let above = sorted.iter().find(|v| **v > bound || (included && **v == bound));
        prop_assert_eq!(tree.biggest_under(&bound, included), under);
        prop_assert_eq!(tree.smallest_above(&bound, included), above);

        let first = sorted.first().filter(|v| **v < bound || (included && **v == bound));
        let last = sorted.last().filter(|v| **v > bound || (included && **v == bound));
        prop_assert_eq!(tree.smallest_under(&bound, included), first);
        prop_assert_eq!(tree.biggest_above(&bound, included), last);

        let strictly_under = sorted.iter().rev().find(|v| **v < bound);
        let strictly_above = sorted.iter().find(|v| **v > bound);
        prop_assert_eq!(tree.closest(&bound), (strictly_under, strictly_above));
    }

    /// Rotations never change the in-order sequence.
    #[test]
    fn prop_rotations_preserve_order(
        values in prop::collection::vec(any::<i32>(), 3..100),
        turns in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let mut tree = tree_of(values);
        let before = tree.to_vec();

        for left in turns {
            let dir = if left { Dir::Left } else { Dir::Right };
            if tree.link(tree.root, !dir) == NIL {
                continue;
            }
            let promoted = tree.rotate_single(tree.root, dir);
            tree.set_link(HEAD, Dir::Right, promoted);

            prop_assert_eq!(tree.to_vec(), before.clone());
            prop_assert!(tree.check_links().is_ok());
        }
    }
}
