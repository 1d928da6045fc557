use log::info;
use memspace::{MemoryError, MemorySpace};

fn log_space(space: &MemorySpace) {
    info!("Free:      {}", space.free_blocks());
    info!("Allocated: {}", space.allocated_blocks());
}

fn main() -> Result<(), MemoryError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let capacity = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);

    let mut space = MemorySpace::new(capacity)?;
    log_space(&space);

    let addr1 = space.malloc(17);
    info!("Requested 17 words, received {addr1:?}");

    let addr2 = space.malloc(20);
    info!("Requested 20 words, received {addr2:?}");

    let addr3 = space.malloc(8);
    info!("Requested 8 words, received {addr3:?}");
    log_space(&space);

    for addr in [addr1, addr2, addr3].into_iter().flatten() {
        space.free(addr)?;
    }
    info!("Freed everything");
    log_space(&space);

    space.defrag();
    info!("After defrag");
    log_space(&space);

    Ok(())
}
