//! Frame instrumentation: duration and size of the last flushed frame.
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_FRAME_NS: AtomicU64 = AtomicU64::new(0);
static LAST_FRAME_BYTES: AtomicU64 = AtomicU64::new(0);
static FRAMES_TOTAL: AtomicU64 = AtomicU64::new(0);

pub fn record_frame(ns: u64, bytes: u64) {
    LAST_FRAME_NS.store(ns, Ordering::Relaxed);
    LAST_FRAME_BYTES.store(bytes, Ordering::Relaxed);
    FRAMES_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub fn last_frame_ns() -> u64 {
    LAST_FRAME_NS.load(Ordering::Relaxed)
}

pub fn last_frame_bytes() -> u64 {
    LAST_FRAME_BYTES.load(Ordering::Relaxed)
}

pub fn frames_total() -> u64 {
    FRAMES_TOTAL.load(Ordering::Relaxed)
}
