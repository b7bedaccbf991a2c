use crate::storage::Key;

/// A node of a linked binary tree.
///
/// Created by the tree internally. Links are arena keys: `parent` is `None` only for the root.
#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) element: T,
    pub(super) parent: Option<Key>,
    pub(super) left: Option<Key>,
    pub(super) right: Option<Key>,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(super) const fn leaf(element: T, parent: Option<Key>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }
    #[inline]
    pub(super) fn num_children(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
    /// Returns the child slot of `self` which holds `child`.
    #[inline]
    pub(super) fn slot_of(&mut self, child: Key) -> &mut Option<Key> {
        if self.left == Some(child) {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}
