//! Positions: validated handles to nodes of a specific container.

use core::sync::atomic::{AtomicU64, Ordering};
use crate::{
    storage::{Arena, Key},
    Error,
    InvalidPosition,
    Result,
};

/// A process-unique identity of a container instance.
///
/// Drawn from a global counter when a container is created, and never reused, so a position minted by one container can never be mistaken for a position of another, even after the first one has been dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);
impl ContainerId {
    /// Draws a fresh id.
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The location of an element within one container.
///
/// A position is a plain copyable token: it does not borrow the container and does not keep the node alive. Every container method receiving a position validates it first, failing with [`InvalidPosition`] if it was made by another container or if its node has since been deleted.
///
/// Two positions are equal if and only if they refer to the same node of the same container instance.
///
/// [`InvalidPosition`]: enum.InvalidPosition.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    container: ContainerId,
    key: Key,
}
impl Position {
    #[inline(always)]
    pub(crate) const fn new(container: ContainerId, key: Key) -> Self {
        Self { container, key }
    }
    /// Returns the id of the container which made the position.
    #[inline(always)]
    pub const fn container(&self) -> ContainerId {
        self.container
    }
}

/// Checks that `position` belongs to `container` and still resolves in `arena`, returning its key.
///
/// This is the one gate every position-consuming operation goes through before touching node internals.
#[inline]
pub(crate) fn validate<T>(container: ContainerId, arena: &Arena<T>, position: Position) -> Result<Key> {
    if position.container != container {
        return Err(Error::InvalidPosition(InvalidPosition::ForeignContainer));
    }
    if !arena.contains_key(position.key) {
        return Err(Error::InvalidPosition(InvalidPosition::Removed));
    }
    Ok(position.key)
}
