#![allow(dead_code)]

use std::cmp::Ordering;

use linked_forest::{Balance, BinaryTree, Position, SortedMap, Tree};

/// Opt-in log output: `RUST_LOG=trace cargo test`.
pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

pub fn keys<K: Clone, V, B, C>(map: &SortedMap<K, V, B, C>) -> Vec<K>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    map.keys().cloned().collect()
}

/// Keys in preorder; equal sequences mean equal shapes.
pub fn preorder_keys<K: Clone, V, B, C>(map: &SortedMap<K, V, B, C>) -> Vec<K>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    map.tree()
        .preorder()
        .map(|p| map.key(p).unwrap().clone())
        .collect()
}

pub fn root_key<K: Clone, V, B, C>(map: &SortedMap<K, V, B, C>) -> Option<K>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    map.tree().root().map(|p| map.key(p).unwrap().clone())
}

/// Edge count of the longest root-to-leaf path, 0 for an empty map.
pub fn tree_height<K, V, B, C>(map: &SortedMap<K, V, B, C>) -> usize
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    map.tree()
        .root()
        .map_or(0, |root| map.tree().height(root).unwrap())
}

/// Root a splay map should have once `key` is removed: the former parent of
/// the node that gets unlinked (the predecessor when `key`'s node has two
/// children), or the spliced-up child when that node was the root.
/// `None` when `key` is absent.
pub fn root_after_remove<K, V, B, C>(map: &SortedMap<K, V, B, C>, key: &K) -> Option<Option<Position>>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    if !map.contains(key) {
        return None;
    }
    let tree = map.tree();
    let p = map.search(key)?;
    let mut target = p;
    if let (Some(l), Some(_)) = (tree.left(p).unwrap(), tree.right(p).unwrap()) {
        target = tree.subtree_last(l).unwrap();
    }
    let parent = tree.parent(target).unwrap();
    Some(parent.or(tree.left(target).unwrap().or(tree.right(target).unwrap())))
}

/// Deterministic shuffled key sequence.
pub fn shuffled(n: usize, seed: u64) -> Vec<i32> {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let mut keys: Vec<i32> = (0..n as i32).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}
