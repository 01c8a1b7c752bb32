use thiserror::Error;

/// Errors returned by [crate::Pathfinder] and [crate::MinHeap].
///
/// Failing to find a path is not an error: [crate::Pathfinder::find_path]
/// reports it as `Ok(None)`. Likewise popping an empty heap returns `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Teleporter index {index} is out of range for {len} teleporters")]
    InvalidIndex { index: usize, len: usize },

    #[error("Out of memory growing the priority queue to {requested} entries")]
    OutOfMemory { requested: usize },
}
