use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all elements created in this process.
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Generate a fresh opaque element id, unique for the process lifetime.
pub fn generate_id() -> String {
    let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst);
    format!("element-{n}")
}
