#![cfg(all(feature = "positional_list", feature = "binary_tree"))]

use positree::{
    expression::ExpressionTree,
    favorites::FavoritesList,
    prelude::*,
    tree_map::TreeMap,
    Error,
    InvalidPosition,
    StructuralError,
};

#[test]
fn list_walks_agree_in_both_directions() {
    let mut list = PositionalList::new();
    let b = list.add_first('b');
    list.add_first('a');
    let d = list.add_last('d');
    list.add_before(d, 'c').unwrap();
    list.add_after(d, 'e').unwrap();
    list.delete(b).unwrap();

    let mut forward = Vec::new();
    let mut cursor = list.first();
    while let Some(p) = cursor {
        forward.push(*list.get(p).unwrap());
        cursor = list.after(p).unwrap();
    }
    let mut backward = Vec::new();
    let mut cursor = list.last();
    while let Some(p) = cursor {
        backward.push(*list.get(p).unwrap());
        cursor = list.before(p).unwrap();
    }
    backward.reverse();
    assert_eq!(forward, ['a', 'c', 'd', 'e']);
    assert_eq!(forward, backward);
    assert_eq!(forward.len(), list.len());
}

#[test]
fn deleted_list_position_is_dead_everywhere() {
    let mut list: PositionalList<_> = (0..4).collect();
    let p = list.positions().nth(2).unwrap();
    assert_eq!(list.delete(p), Ok(2));
    let removed = Error::InvalidPosition(InvalidPosition::Removed);
    assert_eq!(list.before(p), Err(removed));
    assert_eq!(list.after(p), Err(removed));
    assert_eq!(list.replace(p, 9), Err(removed));
    assert_eq!(list.add_before(p, 9), Err(removed));
    assert_eq!(list.delete(p), Err(removed));
}

#[test]
fn binary_delete_with_two_children_fails() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(0).unwrap();
    tree.add_left(root, 1).unwrap();
    tree.add_right(root, 2).unwrap();
    assert_eq!(
        tree.delete(root),
        Err(Error::Structural(StructuralError::TwoChildren)),
    );
}

#[test]
fn expression_tree() {
    let expr = ExpressionTree::build("(((3+1)*4)/((9-5)+2))").unwrap();
    let tree = expr.tree();
    assert_eq!(tree.len(), 11);
    let root = tree.root().unwrap();
    assert_eq!(tree.element(root).unwrap().to_string(), "/");
    let value = expr.evaluate().unwrap();
    assert!((value - 16.0 / 6.0).abs() < 1e-12);
}

#[test]
fn favorites_tracker() {
    let mut favorites = FavoritesList::new();
    for &value in &['a', 'b', 'c', 'b', 'd', 'a', 'a'] {
        favorites.access(value);
    }
    assert_eq!(favorites.top(3).unwrap().copied().collect::<Vec<_>>(), ['a', 'b', 'c']);
    assert_eq!(favorites.count(&'a'), Some(3));
    assert_eq!(favorites.count(&'b'), Some(2));
    assert_eq!(
        favorites.top(5).err(),
        Some(Error::OutOfRange { requested: 5, len: 4 }),
    );
}

#[test]
fn tree_map_search() {
    let map: TreeMap<_, _> = [5, 2, 8, 1, 3].iter().map(|&k| (k, ())).collect();
    let root = map.root().unwrap();
    let hit = map.subtree_search(root, &3).unwrap();
    assert_eq!(map.key(hit), Ok(&3));
    let miss = map.subtree_search(root, &99).unwrap();
    assert_eq!(map.key(miss), Ok(&8));
    assert_eq!(map.after(miss), Ok(None));
}

#[test]
fn replace_twice_keeps_shape() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root("x").unwrap();
    let left = tree.add_left(root, "y").unwrap();
    assert_eq!(tree.replace(left, "z"), Ok("y"));
    assert_eq!(tree.replace(left, "z"), Ok("z"));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.left(root), Ok(Some(left)));
    assert_eq!(tree.height(root), Ok(1));

    let mut list = PositionalList::new();
    let p = list.add_last(1);
    list.add_last(2);
    assert_eq!(list.replace(p, 1), Ok(1));
    assert_eq!(list.replace(p, 1), Ok(1));
    assert_eq!(list.len(), 2);
    assert_eq!(list.first(), Some(p));
}
