//! Fills a space with small blocks, frees every other one and shows how a
//! request that fits the total free space still fails until the free list
//! is defragmented.

use log::{info, warn};
use memspace::{MemoryError, MemorySpace};

const BLOCK: usize = 4;

fn main() -> Result<(), MemoryError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let capacity = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(64);

    let mut space = MemorySpace::new(capacity)?;

    let mut addrs = Vec::new();
    while let Some(addr) = space.malloc(BLOCK) {
        addrs.push(addr);
    }
    info!("Allocated {} blocks of {BLOCK} words", addrs.len());

    for addr in addrs.iter().step_by(2) {
        space.free(*addr)?;
    }

    let stats = space.stats();
    info!(
        "{} words free in {} blocks, largest {} (fragmentation {:.2})",
        stats.free_words,
        stats.free_blocks,
        stats.largest_free,
        stats.fragmentation()
    );

    let request = BLOCK * 2;
    if space.malloc(request).is_none() {
        warn!("Could not allocate {request} words");
    }

    // Freeing the odd blocks too leaves the free list full of neighbours.
    for addr in addrs.iter().skip(1).step_by(2) {
        space.free(*addr)?;
    }
    info!("Before defrag:\n{space}");

    space.defrag();
    let stats = space.stats();
    info!(
        "After defrag: {} free blocks (fragmentation {:.2})\n{space}",
        stats.free_blocks,
        stats.fragmentation()
    );

    match space.malloc(request) {
        Some(addr) => info!("Allocated {request} words at {addr}"),
        None => warn!("Could not allocate {request} words"),
    }

    Ok(())
}
