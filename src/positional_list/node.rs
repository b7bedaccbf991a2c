use crate::storage::Key;

/// A node of a positional list.
///
/// Created by the list internally. The two boundary nodes carry no element and are never exposed through positions.
#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) data: NodeData<T>,
    pub(super) prev: Option<Key>,
    pub(super) next: Option<Key>,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(super) const fn sentinel() -> Self {
        Self {
            data: NodeData::Sentinel,
            prev: None,
            next: None,
        }
    }
    #[inline(always)]
    pub(super) const fn element(element: T, prev: Key, next: Key) -> Self {
        Self {
            data: NodeData::Element(element),
            prev: Some(prev),
            next: Some(next),
        }
    }
    /// Returns the neighbours of an element node.
    #[inline]
    #[track_caller]
    pub(super) fn neighbours(&self) -> (Key, Key) {
        match (self.prev, self.next) {
            (Some(prev), Some(next)) => (prev, next),
            _ => unreachable!("boundary nodes are never reachable through a position"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum NodeData<T> {
    Sentinel,
    Element(T),
}
impl<T> NodeData<T> {
    #[inline]
    pub(super) fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Element(x) => Some(x),
            Self::Sentinel => None,
        }
    }
    #[inline]
    pub(super) fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Element(x) => Some(x),
            Self::Sentinel => None,
        }
    }
    #[inline]
    #[track_caller]
    pub(super) fn into_element(self) -> T {
        match self {
            Self::Element(x) => x,
            Self::Sentinel => unreachable!("boundary nodes are never reachable through a position"),
        }
    }
}
