use crate::storage::Key;

/// A node of a linked general tree.
///
/// Children form a doubly linked sibling chain, so appending a child and unlinking any child are both constant-time.
#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) element: T,
    pub(super) parent: Option<Key>,
    pub(super) prev_sibling: Option<Key>,
    pub(super) next_sibling: Option<Key>,
    pub(super) first_child: Option<Key>,
    pub(super) last_child: Option<Key>,
    pub(super) num_children: usize,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(super) const fn detached(element: T) -> Self {
        Self {
            element,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            num_children: 0,
        }
    }
}
