use core::fmt::Display;
use crate::{general_tree::LinkedTree, tree::Tree, Position, Result};

/// Renders the subtree rooted at `p` in parenthesized notation: each node is followed by the list of its children, comma-separated and wrapped in parentheses, as in `a (b (e, f), c)`.
///
/// # Errors
/// Fails if `p` is not a valid position of `tree`.
///
/// # Example
/// ```rust
/// use positree::{algorithms::parenthesize, LinkedTree};
///
/// let mut tree = LinkedTree::new();
/// let a = tree.add_root('a')?;
/// let b = tree.add_child(a, 'b')?;
/// tree.add_child(a, 'c')?;
/// tree.add_child(b, 'e')?;
/// tree.add_child(b, 'f')?;
/// assert_eq!(parenthesize(&tree, a)?, "a (b (e, f), c)");
/// # Ok::<(), positree::Error>(())
/// ```
pub fn parenthesize<T: Display>(tree: &LinkedTree<T>, p: Position) -> Result<String> {
    let mut out = String::new();
    parenthesize_into(tree, p, &mut out)?;
    Ok(out)
}

fn parenthesize_into<T: Display>(tree: &LinkedTree<T>, p: Position, out: &mut String) -> Result<()> {
    out.push_str(&tree.element(p)?.to_string());
    let mut separator = " (";
    for child in tree.children(p)? {
        out.push_str(separator);
        separator = ", ";
        parenthesize_into(tree, child, out)?;
    }
    if separator == ", " {
        out.push(')');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_tree() {
        let mut tree = LinkedTree::new();
        let a = tree.add_root("a").unwrap();
        let b = tree.add_child(a, "b").unwrap();
        let c = tree.add_child(a, "c").unwrap();
        let d = tree.add_child(a, "d").unwrap();
        let e = tree.add_child(b, "e").unwrap();
        tree.add_child(b, "f").unwrap();
        let h = tree.add_child(c, "h").unwrap();
        tree.add_child(d, "i").unwrap();
        let k = tree.add_child(e, "k").unwrap();
        tree.add_child(k, "q").unwrap();
        tree.add_child(k, "r").unwrap();
        tree.add_child(h, "n").unwrap();
        assert_eq!(
            parenthesize(&tree, a).unwrap(),
            "a (b (e (k (q, r)), f), c (h (n)), d (i))",
        );
        assert_eq!(parenthesize(&tree, h).unwrap(), "h (n)");
        assert_eq!(parenthesize(&tree, d).unwrap(), "d (i)");
    }
}
