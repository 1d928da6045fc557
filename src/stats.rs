//! Observational metrics over a [`crate::MemorySpace`]. Nothing in here is
//! consulted by the allocator itself.

/// Snapshot of how the words of a space are split between the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    /// Total words managed by the space.
    pub capacity: usize,
    /// Words currently in the free list.
    pub free_words: usize,
    /// Words currently allocated.
    pub allocated_words: usize,
    /// Number of entries in the free list.
    pub free_blocks: usize,
    /// Number of entries in the allocated list.
    pub allocated_blocks: usize,
    /// Length of the largest free block.
    pub largest_free: usize,
}

impl MemoryStats {
    /// `1 - largest_free / free_words`, clamped to `[0, 1]`.
    ///
    /// 0.0 means all free words sit in a single block (or nothing is free),
    /// values close to 1.0 mean the free words are scattered across many
    /// small blocks.
    pub fn fragmentation(&self) -> f64 {
        if self.free_words == 0 {
            return 0.0;
        }

        let largest = self.largest_free.min(self.free_words) as f64;
        let ratio = 1.0 - largest / self.free_words as f64;

        ratio.clamp(0.0, 1.0)
    }
}
