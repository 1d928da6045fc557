use std::{fmt, slice};

use crate::block::Block;

/// Ordered sequence of [`Block`].
///
/// Order is meaningful: for the allocated side it is allocation order, for
/// the free side it is the order first-fit scans in. Blocks are only ever
/// appended at the end or removed by index, so the relative order of the
/// remaining blocks never changes unless [`BlockList::sort_by_base`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

pub type Iter<'a> = slice::Iter<'a, Block>;

impl BlockList {
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Block> {
        self.blocks.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Appends `block` to the end of the list.
    pub(crate) fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Removes the block at `index`, shifting everything after it one place
    /// to the left so the order of the rest is kept.
    ///
    /// Panics if `index` is out of bounds, callers only pass indices they
    /// got from [`BlockList::position`] or a scan.
    pub(crate) fn remove(&mut self, index: usize) -> Block {
        self.blocks.remove(index)
    }

    /// Index of the first block matching `predicate`, in list order.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Block) -> bool,
    {
        self.blocks.iter().position(predicate)
    }

    /// Stable sort by ascending base address.
    pub(crate) fn sort_by_base(&mut self) {
        self.blocks.sort_by_key(Block::base);
    }

    /// Sum of the lengths of every block in the list.
    pub fn total_length(&self) -> usize {
        self.blocks.iter().map(Block::length).sum()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Block> for BlockList {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}
