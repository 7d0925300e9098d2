mod common;

use common::{init_logger, keys, root_after_remove, root_key, shuffled, tree_height};
use linked_forest::balance::splay::splay;
use linked_forest::{LinkedBinaryTree, SplayMap, Tree, TreeError};

fn ascending(n: i32) -> SplayMap<i32, i32> {
    let mut map = SplayMap::new();
    for k in 1..=n {
        map.put(k, k * 10).unwrap();
    }
    map
}

#[test]
fn insert_leaves_newest_key_at_root_matrix() {
    init_logger();
    let mut map = SplayMap::new();
    for k in 1..=7 {
        map.put(k, ()).unwrap();
        assert_eq!(root_key(&map), Some(k));
        map.assert_valid().unwrap();
    }
    // increasing inserts leave a left chain under the last key
    assert_eq!(tree_height(&map), 6);
    assert_eq!(keys(&map), (1..=7).collect::<Vec<_>>());
}

#[test]
fn get_splays_found_key_matrix() {
    let mut map = ascending(7);
    assert_eq!(map.get(&1), Ok(&10));
    assert_eq!(root_key(&map), Some(1));
    // zig-zig steps roughly halve the chain
    assert!(tree_height(&map) < 6);
    map.assert_valid().unwrap();

    assert_eq!(map.get(&4), Ok(&40));
    assert_eq!(root_key(&map), Some(4));
    map.assert_valid().unwrap();
}

#[test]
fn get_miss_splays_last_visited_matrix() {
    let mut map = ascending(7);
    assert_eq!(map.get(&0), Err(TreeError::KeyNotFound));
    assert_eq!(root_key(&map), Some(1));
    assert_eq!(map.get(&100), Err(TreeError::KeyNotFound));
    assert_eq!(root_key(&map), Some(7));
    assert_eq!(map.len(), 7);
    map.assert_valid().unwrap();
}

#[test]
fn overwrite_splays_existing_node_matrix() {
    let mut map = ascending(7);
    let p = map.search(&3).unwrap();
    assert_eq!(map.put(3, 33), Ok(Some(30)));
    assert_eq!(map.tree().root(), Some(p));
    assert_eq!(map.value(p), Ok(&33));
    assert_eq!(map.len(), 7);
}

#[test]
fn peek_and_range_leave_shape_matrix() {
    let map = ascending(7);
    let root = map.tree().root();
    assert_eq!(map.peek(&1), Some(&10));
    assert!(map.contains(&2));
    assert_eq!(map.find_range(Some(&2), Some(&5)).count(), 3);
    assert_eq!(map.find_ge(&3).map(|(k, _)| *k), Some(3));
    assert_eq!(map.tree().root(), root);
}

#[test]
fn remove_splays_parent_of_unlinked_matrix() {
    let mut map = ascending(7);
    assert_eq!(map.remove(&1), Ok(10));
    assert_eq!(root_key(&map), Some(2));
    map.assert_valid().unwrap();

    assert_eq!(map.remove(&7), Ok(70));
    assert!(!map.contains(&7));
    map.assert_valid().unwrap();

    assert_eq!(map.remove(&42), Err(TreeError::KeyNotFound));
    assert_eq!(keys(&map), vec![2, 3, 4, 5, 6]);
}

// ascending(7) then get(&1):
//   1
//    \
//     6
//    / \
//   4   7
//  / \
// 2   5
//  \
//   3
fn splayed_chain() -> SplayMap<i32, i32> {
    let mut map = ascending(7);
    map.get(&1).unwrap();
    assert_eq!(
        common::preorder_keys(&map),
        vec![1, 6, 4, 2, 3, 5, 7]
    );
    map
}

#[test]
fn remove_one_child_splays_parent_not_neighbor_matrix() {
    let mut map = splayed_chain();
    let four = map.search(&4).unwrap();
    assert_eq!(root_after_remove(&map, &2), Some(Some(four)));

    // 3 is spliced under 4, then 4 is splayed
    assert_eq!(map.remove(&2), Ok(20));
    assert_eq!(map.tree().root(), Some(four));
    assert_eq!(root_key(&map), Some(4));
    assert_eq!(common::preorder_keys(&map), vec![4, 1, 3, 6, 5, 7]);
    map.assert_valid().unwrap();
}

#[test]
fn remove_two_children_splays_predecessor_parent_matrix() {
    let mut map = splayed_chain();
    let six = map.search(&6).unwrap();
    let four = map.search(&4).unwrap();
    let five = map.search(&5).unwrap();
    assert_eq!(root_after_remove(&map, &6), Some(Some(four)));

    // 5 sits two levels below 6; its entry moves up and 4 is splayed
    assert_eq!(map.remove(&6), Ok(60));
    assert_eq!(root_key(&map), Some(4));
    assert_eq!(map.key(six), Ok(&5));
    assert_eq!(map.key(five), Err(TreeError::StalePosition));
    assert_eq!(common::preorder_keys(&map), vec![4, 1, 2, 3, 5, 7]);
    map.assert_valid().unwrap();
}

#[test]
fn remove_root_with_one_child_promotes_child_matrix() {
    let mut map = ascending(3);
    let two = map.search(&2).unwrap();
    assert_eq!(root_after_remove(&map, &3), Some(Some(two)));
    assert_eq!(map.remove(&3), Ok(30));
    assert_eq!(map.tree().root(), Some(two));
}

#[test]
fn remove_only_entry_matrix() {
    let mut map = SplayMap::new();
    map.put("k", 1).unwrap();
    assert_eq!(map.remove(&"k"), Ok(1));
    assert!(map.is_empty());
    assert_eq!(map.tree().root(), None);
    map.put("j", 2).unwrap();
    assert_eq!(root_key(&map), Some("j"));
}

#[test]
fn shuffled_ladder_matrix() {
    let mut map = SplayMap::new();
    for k in shuffled(400, 3) {
        map.put(k, k).unwrap();
        assert_eq!(root_key(&map), Some(k));
    }
    map.assert_valid().unwrap();
    for k in shuffled(400, 4).into_iter().take(200) {
        assert_eq!(map.get(&k), Ok(&k));
        assert_eq!(root_key(&map), Some(k));
    }
    for k in shuffled(400, 5).into_iter().take(300) {
        let expected = root_after_remove(&map, &k).unwrap();
        assert_eq!(map.remove(&k), Ok(k));
        assert_eq!(map.tree().root(), expected);
    }
    map.assert_valid().unwrap();
    assert_eq!(map.len(), 100);
}

#[test]
fn splay_primitive_cases_matrix() {
    //     4
    //    /
    //   2
    //  / \
    // 1   3
    let mut tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
    let n4 = tree.add_root(4).unwrap();
    let n2 = tree.add_left(n4, 2).unwrap();
    let n1 = tree.add_left(n2, 1).unwrap();
    let n3 = tree.add_right(n2, 3).unwrap();

    // zig-zag
    splay(&mut tree, n3).unwrap();
    assert_eq!(tree.root(), Some(n3));
    assert_eq!(tree.children(n3), Ok(vec![n2, n4]));
    tree.assert_valid().unwrap();

    // zig-zig
    splay(&mut tree, n1).unwrap();
    assert_eq!(tree.root(), Some(n1));
    let order: Vec<i32> = tree
        .preorder()
        .map(|p| *tree.element(p).unwrap())
        .collect();
    assert_eq!(order, vec![1, 2, 3, 4]);

    // zig
    splay(&mut tree, n2).unwrap();
    assert_eq!(tree.root(), Some(n2));
    assert_eq!(tree.children(n2), Ok(vec![n1, n3]));

    // root is a no-op
    splay(&mut tree, n2).unwrap();
    assert_eq!(tree.root(), Some(n2));
    tree.assert_valid().unwrap();
}
