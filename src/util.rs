use crate::{storage::Key, Result};

/// Reports a link which points to a vacant slot. Containers only ever store links to live nodes, so reaching this means the structure itself is corrupted, not that a caller misused a position.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn dangling_link(key: Key) -> ! {
    panic!(
        "structure corrupted: link to slot {} (generation {}) does not resolve",
        key.index(),
        key.generation(),
    )
}

/// Unwraps the result of an operation which was given a position the container itself just handed out.
///
/// Such a position cannot be stale or foreign, so an error here is a bug in the caller.
#[inline]
#[track_caller]
pub(crate) fn own_position<T>(result: Result<T>) -> T {
    match result {
        Ok(x) => x,
        Err(error) => panic!("a position handed out by the container was rejected: {}", error),
    }
}
