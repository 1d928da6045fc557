use std::fmt;

/// A contiguous range of words inside a [`crate::MemorySpace`].
///
/// ```text
///  base                       base + length
///   |                               |
///   v                               v
///   +-------------------------------+
///   |        length (words)         |
///   +-------------------------------+
/// ```
///
/// A block carries no content, only its metadata. Whether it is free or
/// allocated is given by the list that holds it, not by a flag.
///
/// The block does not validate itself. Keeping `length > 0` and keeping
/// blocks from overlapping is the job of the owning space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Start address of the block.
    base: usize,
    /// Size of the block in words.
    length: usize,
}

impl Block {
    pub(crate) const fn new(base: usize, length: usize) -> Self {
        Self { base, length }
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// First address past the end of the block.
    #[inline]
    pub fn end(&self) -> usize {
        self.base + self.length
    }

    #[inline]
    pub(crate) fn set_base(&mut self, base: usize) {
        self.base = base;
    }

    #[inline]
    pub(crate) fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Tells whether `next` starts exactly where this block ends.
    #[inline]
    pub fn is_followed_by(&self, next: &Block) -> bool {
        self.end() == next.base
    }

    pub fn overlaps(&self, other: &Block) -> bool {
        self.base < other.end() && other.base < self.end()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.base, self.length)
    }
}
