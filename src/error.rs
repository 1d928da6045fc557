use thiserror::Error;

/// Errors reported by [`crate::MemorySpace`].
///
/// Running out of space is not one of them: [`crate::MemorySpace::malloc`]
/// reports that with `None` so the caller can defragment and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("cannot free address {address}: no block is currently allocated")]
    NothingAllocated { address: usize },

    #[error("invalid capacity (must be > 0)")]
    InvalidCapacity,
}
