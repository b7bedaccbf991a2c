#![cfg(all(feature = "positional_list", feature = "binary_tree", feature = "general_tree"))]

use std::collections::BTreeSet;
use proptest::prelude::*;
use positree::prelude::*;

#[derive(Clone, Debug)]
enum ListOp {
    AddFirst(u8),
    AddLast(u8),
    AddBefore(usize, u8),
    AddAfter(usize, u8),
    Delete(usize),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<u8>().prop_map(ListOp::AddFirst),
        any::<u8>().prop_map(ListOp::AddLast),
        (any::<usize>(), any::<u8>()).prop_map(|(i, x)| ListOp::AddBefore(i, x)),
        (any::<usize>(), any::<u8>()).prop_map(|(i, x)| ListOp::AddAfter(i, x)),
        any::<usize>().prop_map(ListOp::Delete),
    ]
}

#[derive(Clone, Debug)]
enum TreeOp {
    AddRoot,
    AddLeft(usize),
    AddRight(usize),
    Delete(usize),
    Attach(usize, usize, usize),
}

fn tree_op() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        Just(TreeOp::AddRoot),
        any::<usize>().prop_map(TreeOp::AddLeft),
        any::<usize>().prop_map(TreeOp::AddRight),
        any::<usize>().prop_map(TreeOp::Delete),
        (any::<usize>(), 0..4_usize, 0..4_usize).prop_map(|(i, l, r)| TreeOp::Attach(i, l, r)),
    ]
}

/// A left-leaning chain of `len` fresh elements.
fn chain(len: usize, next: &mut u32) -> LinkedBinaryTree<u32> {
    let mut tree = LinkedBinaryTree::new();
    let mut cursor = None;
    for _ in 0..len {
        *next += 1;
        cursor = Some(match cursor {
            None => tree.add_root(*next).unwrap(),
            Some(p) => tree.add_left(p, *next).unwrap(),
        });
    }
    tree
}

fn reachable<T: PositionalTree>(tree: &T) -> Vec<Position> {
    match tree.root() {
        Some(root) => tree.preorder_positions(root).unwrap(),
        None => Vec::new(),
    }
}

proptest! {
    #[test]
    fn list_matches_a_vec(ops in prop::collection::vec(list_op(), 0..64)) {
        let mut list = PositionalList::new();
        let mut model: Vec<u8> = Vec::new();
        for op in ops {
            let positions = list.positions().collect::<Vec<_>>();
            match op {
                ListOp::AddFirst(x) => {
                    list.add_first(x);
                    model.insert(0, x);
                }
                ListOp::AddLast(x) => {
                    list.add_last(x);
                    model.push(x);
                }
                ListOp::AddBefore(i, x) if !model.is_empty() => {
                    let i = i % model.len();
                    list.add_before(positions[i], x).unwrap();
                    model.insert(i, x);
                }
                ListOp::AddAfter(i, x) if !model.is_empty() => {
                    let i = i % model.len();
                    list.add_after(positions[i], x).unwrap();
                    model.insert(i + 1, x);
                }
                ListOp::Delete(i) if !model.is_empty() => {
                    let i = i % model.len();
                    prop_assert_eq!(list.delete(positions[i]).unwrap(), model.remove(i));
                    prop_assert!(list.get(positions[i]).is_err());
                }
                _ => {}
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model.clone());
            let mut backward = list.iter().rev().copied().collect::<Vec<_>>();
            backward.reverse();
            prop_assert_eq!(backward, model.clone());
        }
    }

    #[test]
    fn binary_tree_size_and_traversals(ops in prop::collection::vec(tree_op(), 0..64)) {
        let mut tree = LinkedBinaryTree::new();
        let mut next = 0_u32;
        for op in ops {
            let positions = reachable(&tree);
            let pick = |i: usize| positions[i % positions.len()];
            match op {
                TreeOp::AddRoot => {
                    next += 1;
                    prop_assert_eq!(tree.add_root(next).is_ok(), positions.is_empty());
                }
                TreeOp::AddLeft(i) if !positions.is_empty() => {
                    next += 1;
                    let _ = tree.add_left(pick(i), next);
                }
                TreeOp::AddRight(i) if !positions.is_empty() => {
                    next += 1;
                    let _ = tree.add_right(pick(i), next);
                }
                TreeOp::Delete(i) if !positions.is_empty() => {
                    let p = pick(i);
                    let two = tree.num_children(p).unwrap() == 2;
                    prop_assert_eq!(tree.delete(p).is_err(), two);
                }
                TreeOp::Attach(i, l, r) if !positions.is_empty() => {
                    let p = pick(i);
                    let leaf = tree.is_leaf(p).unwrap();
                    let (mut left, mut right) = (chain(l, &mut next), chain(r, &mut next));
                    let before = tree.len();
                    prop_assert_eq!(tree.attach(p, &mut left, &mut right).is_ok(), leaf);
                    if leaf {
                        prop_assert_eq!(tree.len(), before + l + r);
                        prop_assert!(left.is_empty() && right.is_empty());
                    }
                }
                _ => {}
            }
            let n = tree.len();
            prop_assert_eq!(reachable(&tree).len(), n);
            if let Some(root) = tree.root() {
                let expected = tree.preorder(root).unwrap().into_iter().copied().collect::<BTreeSet<_>>();
                prop_assert_eq!(expected.len(), n);
                for order in [
                    tree.inorder(root).unwrap(),
                    tree.postorder(root).unwrap(),
                    tree.level_order(root).unwrap(),
                ] {
                    prop_assert_eq!(order.len(), n);
                    prop_assert_eq!(order.into_iter().copied().collect::<BTreeSet<_>>(), expected.clone());
                }
            }
        }
    }

    #[test]
    fn general_tree_size_and_traversals(ops in prop::collection::vec((0..3_u8, any::<usize>()), 0..64)) {
        let mut tree = LinkedTree::new();
        let mut next = 0_u32;
        for (kind, i) in ops {
            let positions = reachable(&tree);
            if positions.is_empty() {
                next += 1;
                tree.add_root(next).unwrap();
                continue;
            }
            let p = positions[i % positions.len()];
            match kind {
                0 => {
                    next += 1;
                    tree.add_child(p, next).unwrap();
                }
                1 => {
                    let children = tree.num_children(p).unwrap();
                    let parent = tree.parent(p).unwrap();
                    let siblings = parent.map(|q| tree.num_children(q).unwrap());
                    tree.delete(p).unwrap();
                    prop_assert!(tree.element(p).is_err());
                    // The parent keeps its child count when a child is promoted
                    if let (Some(q), Some(siblings)) = (parent, siblings) {
                        let now = tree.num_children(q).unwrap();
                        prop_assert_eq!(now, if children > 0 { siblings } else { siblings - 1 });
                    }
                }
                _ => {
                    let mut donor = LinkedTree::new();
                    next += 1;
                    let r = donor.add_root(next).unwrap();
                    next += 1;
                    donor.add_child(r, next).unwrap();
                    let leaf = tree.is_leaf(p).unwrap();
                    prop_assert_eq!(tree.attach(p, &mut donor).is_ok(), leaf);
                    prop_assert_eq!(donor.is_empty(), leaf);
                }
            }
            let n = tree.len();
            prop_assert_eq!(reachable(&tree).len(), n);
            if let Some(root) = tree.root() {
                let pre = tree.preorder(root).unwrap().into_iter().copied().collect::<BTreeSet<_>>();
                let post = tree.postorder(root).unwrap().into_iter().copied().collect::<BTreeSet<_>>();
                let level = tree.level_order(root).unwrap();
                prop_assert_eq!(pre.len(), n);
                prop_assert_eq!(level.len(), n);
                prop_assert_eq!(&pre, &post);
                prop_assert_eq!(level.into_iter().copied().collect::<BTreeSet<_>>(), pre);
            }
        }
    }
}
