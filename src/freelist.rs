use log::trace;

use crate::{block::Block, list::BlockList};

/// List to keep track of free [`Block`].
///
/// Freed blocks are appended at the end and never merged on insertion, so
/// after a few allocations and frees the list is neither sorted nor
/// coalesced:
///
/// ```text
///   Free List (scan order)
///
///   +---------+     +---------+     +---------+
///   | (10, 5) | --> | (0, 10) | --> | (15, 5) |
///   +---------+     +---------+     +---------+
/// ```
///
/// Merging only happens when [`FreeList::coalesce`] is called, which sorts
/// the list by base address and folds every run of contiguous blocks into one:
///
/// ```text
///   +---------+
///   | (0, 20) |
///   +---------+
/// ```
#[derive(Debug, Clone, Default)]
pub(crate) struct FreeList {
    /// Free blocks in scan order.
    pub items: BlockList,
}

impl FreeList {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self {
            items: BlockList::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an existing `block` to the end of the free list. Its base
    /// and length are kept as they are.
    pub fn insert_free_block(&mut self, block: Block) {
        self.items.append(block);
    }

    /// Returns the index of the block where `length` words can be
    /// allocated.
    ///
    /// This is first-fit: the list is scanned in its current order and the
    /// first block with at least `length` words wins, even if a tighter fit
    /// exists further down.
    pub fn find_free_block(&self, length: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        self.items.position(|block| {
            trace!("first-fit: checking {block} for {length} words");
            block.length() >= length
        })
    }

    /// Removes the block at `index` from the list.
    pub fn take(&mut self, index: usize) -> Block {
        self.items.remove(index)
    }

    /// Carves `length` words off the front of the block at `index` and
    /// returns them as a new block.
    ///
    /// The free block is updated in place so it keeps its position in the
    /// scan order. The caller guarantees the block is strictly longer than
    /// `length`, otherwise [`FreeList::take`] must be used.
    pub fn shrink_front(&mut self, index: usize, length: usize) -> Option<Block> {
        let free = self.items.get_mut(index)?;
        debug_assert!(free.length() > length);

        let carved = Block::new(free.base(), length);

        free.set_base(free.base() + length);
        free.set_length(free.length() - length);

        Some(carved)
    }

    /// Sorts the free list by base address and merges every pair of
    /// neighbours where one ends exactly where the next starts.
    ///
    /// After a merge the current block is checked again against its new
    /// neighbour, so a whole run of contiguous blocks collapses in a single
    /// pass. Returns the number of merges performed.
    pub fn coalesce(&mut self) -> usize {
        if self.items.len() <= 1 {
            return 0;
        }

        self.items.sort_by_base();

        let mut merges = 0;
        let mut current = 0;

        while current + 1 < self.items.len() {
            let (Some(block), Some(next)) = (self.items.get(current), self.items.get(current + 1))
            else {
                break;
            };

            if block.is_followed_by(next) {
                trace!("coalesce: merging {block} with {next}");

                let absorbed = next.length();
                // We remove the next block since it is going to be merged
                self.items.remove(current + 1);

                if let Some(block) = self.items.get_mut(current) {
                    block.set_length(block.length() + absorbed);
                }
                merges += 1;
            } else {
                current += 1;
            }
        }

        merges
    }

    /// Length of the largest free block, or 0 when the list is empty.
    pub fn largest(&self) -> usize {
        self.items.iter().map(Block::length).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_list(blocks: &[(usize, usize)]) -> FreeList {
        FreeList {
            items: blocks.iter().map(|&(b, l)| Block::new(b, l)).collect(),
        }
    }

    fn contents(list: &FreeList) -> Vec<(usize, usize)> {
        list.items.iter().map(|b| (b.base(), b.length())).collect()
    }

    #[test]
    fn first_fit_takes_first_adequate_block() {
        let list = free_list(&[(0, 5), (10, 3), (20, 8)]);

        assert_eq!(Some(0), list.find_free_block(3));
        assert_eq!(Some(0), list.find_free_block(5));
        assert_eq!(Some(2), list.find_free_block(6));
        assert_eq!(None, list.find_free_block(9));
    }

    #[test]
    fn first_fit_skips_small_blocks() {
        let list = free_list(&[(0, 2), (10, 3), (20, 8)]);

        assert_eq!(Some(1), list.find_free_block(3));
    }

    #[test]
    fn empty_list_has_no_fit() {
        assert_eq!(None, FreeList::new().find_free_block(1));
    }

    #[test]
    fn shrink_front_keeps_position() {
        let mut list = free_list(&[(0, 2), (250, 20), (400, 8)]);

        let carved = list.shrink_front(1, 17);

        assert_eq!(Some(Block::new(250, 17)), carved);
        assert_eq!(vec![(0, 2), (267, 3), (400, 8)], contents(&list));
    }

    #[test]
    fn coalesce_sorts_and_merges() {
        let mut list = free_list(&[(10, 5), (0, 10), (15, 5)]);

        assert_eq!(2, list.coalesce());
        assert_eq!(vec![(0, 20)], contents(&list));
    }

    #[test]
    fn coalesce_keeps_gaps() {
        let mut list = free_list(&[(30, 5), (0, 10), (12, 3), (15, 5), (35, 1)]);

        list.coalesce();

        assert_eq!(vec![(0, 10), (12, 8), (30, 6)], contents(&list));
    }

    #[test]
    fn coalesce_single_block_is_noop() {
        let mut list = free_list(&[(7, 3)]);

        assert_eq!(0, list.coalesce());
        assert_eq!(vec![(7, 3)], contents(&list));
    }

    #[test]
    fn largest_block() {
        assert_eq!(0, FreeList::new().largest());
        assert_eq!(8, free_list(&[(0, 5), (10, 3), (20, 8)]).largest());
    }
}
