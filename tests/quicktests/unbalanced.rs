use searchtree::unbalanced::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

fn values(tree: &Tree<i8>) -> Vec<i8> {
    tree.in_order()
        .map(|values| values.copied().collect())
        .unwrap_or_default()
}

fn strictly_ascending(xs: &[i8]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both, and that every
/// operation reported the same outcome.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => tree.insert(*x) == set.insert(*x),
            Op::Remove(x) => tree.remove(x) == set.take(x),
            Op::Iter => values(tree).iter().eq(set.iter()),
        };
        if !agrees {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && values(&tree).iter().eq(set.iter())
        && tree.is_empty() == set.is_empty()
        && tree.find_min() == set.iter().next()
        && tree.find_max() == set.iter().next_back()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for x in &removes {
        tree.remove(x);
    }

    strictly_ascending(&values(&tree))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicates_are_ignored(xs: Vec<i8>) -> bool {
    let once = tree_of(&xs);
    let mut twice = tree_of(&xs);
    let reinserted = xs.iter().any(|x| twice.insert(*x));

    !reinserted && format!("{:?}", once) == format!("{:?}", twice)
}

#[quickcheck]
fn with_removes(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - drop each one.
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn remove_missing_is_noop(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = tree_of(&xs);
    tree.remove(&x);
    let before = values(&tree);

    tree.remove(&x).is_none() && values(&tree) == before
}

#[quickcheck]
fn remove_present_takes_exactly_one(xs: Vec<i8>) -> bool {
    let Some(&target) = xs.first() else {
        return true;
    };
    let mut tree = tree_of(&xs);
    let mut expected = values(&tree);
    expected.retain(|x| *x != target);

    tree.remove(&target) == Some(target) && values(&tree) == expected
}

#[quickcheck]
fn min_max_match_in_order(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let values = values(&tree);

    tree.find_min() == values.first() && tree.find_max() == values.last()
}

#[quickcheck]
fn clear_resets(xs: Vec<i8>, probe: i8) -> bool {
    let mut tree = tree_of(&xs);
    tree.clear();

    tree.is_empty()
        && tree.in_order().is_none()
        && tree.find_min().is_none()
        && tree.find_max().is_none()
        && tree.height().is_none()
        && !tree.contains(&probe)
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let len = values(&tree).len();

    match tree.height() {
        None => len == 0,
        // A binary tree of height h holds at most 2^(h+1) - 1 values and
        // at least h + 1.
        Some(h) => h < len && (h >= 63 || len < (1usize << (h + 1))),
    }
}
