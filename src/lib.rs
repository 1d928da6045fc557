//! # memspace
//!
//! A first-fit allocator simulated over a fixed range of words. No memory is
//! touched: the crate only keeps the bookkeeping an allocator would, which
//! makes free-list management, block splitting, coalescing and fragmentation
//! easy to observe.
//!
//! ```text
//!   MemorySpace::new(100)
//!
//!   Free:      (0, 100)
//!   Allocated:
//!
//!   malloc(17) -> 0, malloc(20) -> 17, free(0)
//!
//!   Free:      (37, 63) (0, 17)
//!   Allocated: (17, 20)
//! ```
//!
//! Freed blocks go to the end of the free list untouched. Adjacent free
//! blocks are only merged when [`MemorySpace::defrag`] is called explicitly,
//! [`MemorySpace::malloc`] never does it on its own.
//!
//! ```rust
//! use memspace::MemorySpace;
//!
//! let mut space = MemorySpace::new(20)?;
//!
//! assert_eq!(Some(0), space.malloc(17));
//! assert_eq!("(17, 3)\n(0, 17)", space.to_string());
//!
//! space.free(0)?;
//! space.defrag();
//! assert_eq!(Some(0), space.malloc(20));
//! # Ok::<(), memspace::MemoryError>(())
//! ```

mod block;
mod error;
mod freelist;
mod list;
mod space;
mod stats;

pub use block::Block;
pub use error::MemoryError;
pub use list::BlockList;
pub use space::MemorySpace;
pub use stats::MemoryStats;
