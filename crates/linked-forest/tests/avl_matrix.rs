mod common;

use common::{init_logger, keys, shuffled, tree_height};
use linked_forest::balance::avl::rebalance;
use linked_forest::{AvlMap, LinkedBinaryTree, Tree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn avl_bound(n: usize) -> usize {
    // an AVL tree with n nodes has at most 1.4405 * log2(n + 2) levels
    (1.4405 * ((n + 2) as f64).log2()).floor() as usize
}

#[test]
fn insert_then_delete_scenario_matrix() {
    init_logger();
    let mut map = AvlMap::new();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        map.put(k, k.to_string()).unwrap();
        map.assert_valid().unwrap();
    }
    assert_eq!(tree_height(&map), 2);

    assert_eq!(map.remove(&5), Ok("5".to_string()));
    map.assert_valid().unwrap();
    assert_eq!(map.remove(&3), Ok("3".to_string()));
    map.assert_valid().unwrap();

    assert_eq!(keys(&map), vec![1, 4, 7, 8, 9]);
    assert_eq!(map.len(), 5);
}

#[test]
fn ascending_ladder_stays_balanced_matrix() {
    let mut map = AvlMap::new();
    for i in 0..1024 {
        map.put(i, i).unwrap();
        map.assert_valid().unwrap();
    }
    // perfectly balanced for 2^k - 1 nodes, one extra level here
    assert_eq!(tree_height(&map), 10);
    assert!(tree_height(&map) <= avl_bound(map.len()));

    for i in (0..1024).step_by(3) {
        assert_eq!(map.remove(&i), Ok(i));
        map.assert_valid().unwrap();
    }
    for i in 0..1024 {
        if i % 3 == 0 {
            assert!(!map.contains(&i));
        } else {
            assert_eq!(map.get(&i), Ok(&i));
        }
    }
    assert!(tree_height(&map) <= avl_bound(map.len()));
}

#[test]
fn descending_and_zig_zag_inserts_matrix() {
    let mut desc = AvlMap::new();
    for i in (0..200).rev() {
        desc.put(i, ()).unwrap();
    }
    desc.assert_valid().unwrap();
    assert!(tree_height(&desc) <= avl_bound(200));

    // alternating outside-in order forces double rotations
    let mut zz = AvlMap::new();
    let (mut lo, mut hi) = (0, 199);
    while lo <= hi {
        zz.put(lo, ()).unwrap();
        zz.put(hi, ()).unwrap();
        zz.assert_valid().unwrap();
        lo += 1;
        hi -= 1;
    }
    assert_eq!(zz.len(), 200);
    assert_eq!(keys(&zz), (0..200).collect::<Vec<_>>());
}

#[test]
fn random_operations_keep_invariant_matrix() {
    let mut rng = StdRng::seed_from_u64(0xA11);
    let mut map = AvlMap::new();
    let mut model = std::collections::BTreeMap::new();
    for _ in 0..5_000 {
        let k: u16 = rng.gen_range(0..512);
        if rng.gen_bool(0.6) {
            assert_eq!(map.put(k, k as u32).unwrap(), model.insert(k, k as u32));
        } else {
            assert_eq!(map.remove(&k).ok(), model.remove(&k));
        }
    }
    map.assert_valid().unwrap();
    assert_eq!(map.len(), model.len());
    assert!(map.iter().map(|(k, v)| (*k, *v)).eq(model.into_iter()));
    assert!(tree_height(&map) <= avl_bound(map.len()));
}

#[test]
fn shuffled_drain_matrix() {
    let mut map = AvlMap::new();
    for k in shuffled(300, 7) {
        map.put(k, ()).unwrap();
    }
    for k in shuffled(300, 8) {
        map.remove(&k).unwrap();
        map.assert_valid().unwrap();
    }
    assert!(map.is_empty());
    assert_eq!(map.tree().root(), None);
}

#[test]
fn heights_are_stored_per_node_matrix() {
    let mut map = AvlMap::new();
    for k in [2, 1, 3] {
        map.put(k, ()).unwrap();
    }
    let tree = map.tree();
    let root = tree.root().unwrap();
    assert_eq!(tree.meta(root), Ok(&2));
    for child in tree.children(root).unwrap() {
        assert_eq!(tree.meta(child), Ok(&1));
    }
}

#[test]
fn rebalance_fixes_hand_built_chain_matrix() {
    // 1 → 2 → 3 as a right chain, heights filled in by hand
    let mut tree = LinkedBinaryTree::<i32, u32>::new();
    let a = tree.add_root(1).unwrap();
    let b = tree.add_right(a, 2).unwrap();
    let c = tree.add_right(b, 3).unwrap();
    *tree.meta_mut(a).unwrap() = 2;
    *tree.meta_mut(b).unwrap() = 1;

    rebalance(&mut tree, c).unwrap();
    assert_eq!(tree.root(), Some(b));
    assert_eq!(tree.children(b), Ok(vec![a, c]));
    assert_eq!(tree.meta(b), Ok(&2));
    assert_eq!(tree.meta(a), Ok(&1));
    assert_eq!(tree.meta(c), Ok(&1));
    tree.assert_valid().unwrap();
}
