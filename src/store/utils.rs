//! Store utility functions.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static ENTITY_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a 12-character hex ID for store entities.
///
/// The timestamp prefix keeps ids distinct across sessions; the counter
/// suffix keeps them unique within one, including entities created in the
/// same instant.
pub fn generate_entity_id() -> String {
    let count = ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed);
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let timestamp = (duration.as_secs() as u32) ^ duration.subsec_nanos();
    format!("{:08x}{:04x}", timestamp, count & 0xffff)
}
