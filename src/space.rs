use std::fmt;

use log::{debug, trace, warn};

use crate::{
    block::Block, error::MemoryError, freelist::FreeList, list::BlockList, stats::MemoryStats,
};

/// A managed memory space of a fixed number of words.
///
/// The space keeps two lists. Every word of `[0, capacity)` is covered by
/// exactly one block of one of them at all times:
///
/// ```text
///   Allocated List (allocation order)
///
///   +---------+     +---------+
///   | (0, 17) | --> | (20, 5) |
///   +---------+     +---------+
///
///   Free List (scan order)
///
///   +---------+     +----------+
///   | (17, 3) | --> | (25, 75) |
///   +---------+     +----------+
///
///   0        17  20   25                                   100
///   +---------+---+----+-------------------------------------+
///   |  alloc  |   |allo|               free                  |
///   +---------+---+----+-------------------------------------+
/// ```
///
/// Only bookkeeping is simulated: no words are actually stored anywhere.
/// The space is not synchronized, callers sharing it across threads have
/// to wrap it in a lock.
#[derive(Debug, Clone)]
pub struct MemorySpace {
    /// Blocks handed out by [`MemorySpace::malloc`], in allocation order.
    allocated: BlockList,
    /// Blocks available for allocation. See [`FreeList`].
    free: FreeList,
    /// Total number of words managed.
    capacity: usize,
}

impl MemorySpace {
    /// Creates a new space managing `max_size` words.
    ///
    /// When created, nothing is allocated and the free list holds a single
    /// block `(0, max_size)`.
    pub fn new(max_size: usize) -> Result<Self, MemoryError> {
        if max_size == 0 {
            return Err(MemoryError::InvalidCapacity);
        }

        let mut free = FreeList::new();
        free.insert_free_block(Block::new(0, max_size));

        debug!("memory space created with {max_size} words");

        Ok(Self {
            allocated: BlockList::new(),
            free,
            capacity: max_size,
        })
    }

    /// Allocates a block of `length` words and returns its base address, or
    /// `None` if no free block is large enough.
    ///
    /// The free list is scanned first-fit in its current order. If the
    /// found block has exactly `length` words it moves as is to the
    /// allocated list. Otherwise it is split: the first `length` words
    /// become the new allocated block and the free block is shrunk in place,
    /// keeping its position in the free list. For example, asking for 17
    /// words from a free block `(250, 20)` allocates `(250, 17)` and leaves
    /// `(267, 3)` behind.
    ///
    /// A failed allocation never triggers [`MemorySpace::defrag`]; that is
    /// up to the caller. A zero-length request fails without touching
    /// anything.
    pub fn malloc(&mut self, length: usize) -> Option<usize> {
        if length == 0 {
            warn!("malloc: zero-length request rejected");
            return None;
        }

        let Some(index) = self.free.find_free_block(length) else {
            warn!(
                "malloc: no free block of {length} words ({} words free in {} blocks)",
                self.free.items.total_length(),
                self.free.items.len()
            );
            return None;
        };

        let exact = self
            .free
            .items
            .get(index)
            .is_some_and(|found| found.length() == length);

        let block = if exact {
            trace!("malloc: exact fit at free index {index}");
            self.free.take(index)
        } else {
            self.free.shrink_front(index, length)?
        };

        self.allocated.append(block);
        debug!("malloc: allocated {block}");

        Some(block.base())
    }

    /// Frees the block whose base address is `address`, appending it
    /// unchanged to the end of the free list. It is not merged with its
    /// neighbours until [`MemorySpace::defrag`] runs.
    ///
    /// Freeing while nothing is allocated is an error. Freeing an address
    /// that matches no allocated block, while others are allocated, does
    /// nothing and returns `Ok(())`.
    pub fn free(&mut self, address: usize) -> Result<(), MemoryError> {
        if self.allocated.is_empty() {
            return Err(MemoryError::NothingAllocated { address });
        }

        match self.allocated.position(|block| block.base() == address) {
            Some(index) => {
                let block = self.allocated.remove(index);
                self.free.insert_free_block(block);
                debug!("free: released {block}");
            }
            None => warn!("free: no allocated block starts at {address}, ignoring"),
        }

        Ok(())
    }

    /// Merges address-adjacent free blocks.
    ///
    /// The free list ends up sorted by base address with no two entries
    /// contiguous. The allocated list is not touched.
    pub fn defrag(&mut self) {
        let before = self.free.items.len();
        let merges = self.free.coalesce();

        debug!(
            "defrag: {before} free blocks -> {} ({merges} merges)",
            self.free.items.len()
        );
    }

    /// Total number of words managed by this space.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free blocks in scan order.
    pub fn free_blocks(&self) -> &BlockList {
        &self.free.items
    }

    /// Allocated blocks in allocation order.
    pub fn allocated_blocks(&self) -> &BlockList {
        &self.allocated
    }

    /// Tells whether an allocated block starts at `address`.
    pub fn is_allocated(&self, address: usize) -> bool {
        self.allocated.position(|block| block.base() == address).is_some()
    }

    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            capacity: self.capacity,
            free_words: self.free.items.total_length(),
            allocated_words: self.allocated.total_length(),
            free_blocks: self.free.items.len(),
            allocated_blocks: self.allocated.len(),
            largest_free: self.free.largest(),
        }
    }
}

/// Free list on the first line, allocated list on the second. Meant for
/// debugging, the format is not stable.
impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.free.items)?;
        write!(f, "{}", self.allocated)
    }
}
