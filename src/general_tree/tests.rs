use super::*;
use crate::{prelude::*, InvalidPosition};

fn children_of<T>(tree: &LinkedTree<T>, p: Position) -> Vec<&T> {
    tree.children(p)
        .unwrap()
        .map(|c| tree.element(c).unwrap())
        .collect()
}

#[test]
fn basic() {
    let mut tree = LinkedTree::new();
    let a = tree.add_root('a').unwrap();
    let b = tree.add_child(a, 'b').unwrap();
    let c = tree.add_child(a, 'c').unwrap();
    let d = tree.add_child(a, 'd').unwrap();
    let e = tree.add_child(c, 'e').unwrap();
    assert_eq!(tree.len(), 5);
    assert_eq!(children_of(&tree, a), [&'b', &'c', &'d']);
    assert_eq!(tree.children(a).unwrap().len(), 3);
    assert_eq!(tree.num_children(a), Ok(3));
    assert_eq!(tree.parent(e), Ok(Some(c)));
    assert_eq!(tree.is_leaf(b), Ok(true));
    assert_eq!(tree.is_leaf(c), Ok(false));
    assert_eq!(tree.depth(e), Ok(2));
    assert_eq!(tree.height(a), Ok(2));
    assert_eq!(tree.height(d), Ok(0));
    assert_eq!(
        tree.add_root('z'),
        Err(Error::Structural(StructuralError::RootExists)),
    );
}

#[test]
fn delete_leaf_keeps_sibling_order() {
    let mut tree = LinkedTree::new();
    let root = tree.add_root(0).unwrap();
    let kids = (1..=4)
        .map(|i| tree.add_child(root, i).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(tree.delete(kids[1]), Ok(2));
    assert_eq!(children_of(&tree, root), [&1, &3, &4]);
    assert_eq!(tree.delete(kids[0]), Ok(1));
    assert_eq!(tree.delete(kids[3]), Ok(4));
    assert_eq!(children_of(&tree, root), [&3]);
    assert_eq!(tree.num_children(root), Ok(1));
    assert_eq!(
        tree.element(kids[0]),
        Err(Error::InvalidPosition(InvalidPosition::Removed)),
    );
}

#[test]
fn delete_promotes_first_child_in_place() {
    // r
    // ├── x
    // ├── p
    // │   ├── c1
    // │   │   └── g
    // │   ├── c2
    // │   └── c3
    // └── y
    let mut tree = LinkedTree::new();
    let r = tree.add_root("r").unwrap();
    tree.add_child(r, "x").unwrap();
    let p = tree.add_child(r, "p").unwrap();
    tree.add_child(r, "y").unwrap();
    let c1 = tree.add_child(p, "c1").unwrap();
    let c2 = tree.add_child(p, "c2").unwrap();
    tree.add_child(p, "c3").unwrap();
    tree.add_child(c1, "g").unwrap();

    assert_eq!(tree.delete(p), Ok("p"));
    assert_eq!(tree.len(), 7);
    assert_eq!(children_of(&tree, r), [&"x", &"c1", &"y"]);
    assert_eq!(children_of(&tree, c1), [&"g", &"c2", &"c3"]);
    assert_eq!(tree.parent(c1), Ok(Some(r)));
    assert_eq!(tree.parent(c2), Ok(Some(c1)));
    assert_eq!(tree.num_children(c1), Ok(3));
    assert_eq!(tree.preorder(r).unwrap(), [&"r", &"x", &"c1", &"g", &"c2", &"c3", &"y"]);
}

#[test]
fn delete_root_promotes_to_root() {
    let mut tree = LinkedTree::new();
    let r = tree.add_root(1).unwrap();
    let a = tree.add_child(r, 2).unwrap();
    tree.add_child(r, 3).unwrap();
    assert_eq!(tree.delete(r), Ok(1));
    assert_eq!(tree.root(), Some(a));
    assert_eq!(tree.parent(a), Ok(None));
    assert_eq!(children_of(&tree, a), [&3]);

    let mut lone = LinkedTree::new();
    let only = lone.add_root('o').unwrap();
    assert_eq!(lone.delete(only), Ok('o'));
    assert!(lone.is_empty());
    assert_eq!(lone.root(), None);
}

#[test]
fn attach_moves_the_subtree() {
    let mut tree = LinkedTree::new();
    let r = tree.add_root("r").unwrap();
    let leaf = tree.add_child(r, "leaf").unwrap();

    let mut donor = LinkedTree::new();
    let s = donor.add_root("s").unwrap();
    donor.add_child(s, "s1").unwrap();
    donor.add_child(s, "s2").unwrap();

    assert_eq!(
        tree.attach(r, &mut donor),
        Err(Error::Structural(StructuralError::NotALeaf)),
    );
    assert_eq!(donor.len(), 3);

    tree.attach(leaf, &mut donor).unwrap();
    assert!(donor.is_empty());
    assert!(donor.element(s).is_err());
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.preorder(r).unwrap(), [&"r", &"leaf", &"s", &"s1", &"s2"]);
    assert_eq!(tree.height(r), Ok(3));

    // Attaching an empty tree is a no-op
    let mut empty = LinkedTree::new();
    let s1 = tree.level_order_positions(r).unwrap()[3];
    tree.attach(s1, &mut empty).unwrap();
    assert_eq!(tree.len(), 5);
}

#[test]
fn foreign_positions_are_rejected() {
    let mut a = LinkedTree::new();
    let ra = a.add_root(1).unwrap();
    let b = a.clone();
    assert_eq!(
        b.element(ra),
        Err(Error::InvalidPosition(InvalidPosition::ForeignContainer)),
    );
    assert_eq!(b.preorder(b.root().unwrap()).unwrap(), [&1]);
}
