//! Buffer staging between the host's linear memory and owned storage.
//!
//! Inputs are copied into owned vectors the moment a call enters the module;
//! outputs are boxed and pinned in a process-global pool so a returned
//! address stays valid until teardown. One cooperative caller at a time, so
//! everything lives in thread-local cells.

use std::cell::{Cell, RefCell};
use std::slice;

thread_local! {
    static LAST_LEN: Cell<u32> = const { Cell::new(0) };
    static OUTPUTS: RefCell<Vec<Box<[u8]>>> = const { RefCell::new(Vec::new()) };
}

/// Hands out a zeroed writable region that lives until module teardown.
pub(crate) fn reserve(size: usize) -> *mut u8 {
    let mut region = vec![0u8; size].into_boxed_slice();
    let ptr = region.as_mut_ptr();
    // No free is exposed; the region is intentionally leaked.
    std::mem::forget(region);
    ptr
}

/// Copies a caller-owned range out of shared memory before any codec work.
///
/// A null address or zero length becomes an empty vector; validation of what
/// that means is the codec's business.
pub(crate) fn copy_in(ptr: *const u8, len: u32) -> Vec<u8> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    // Contract: the host keeps `ptr..ptr+len` valid and untouched for the
    // duration of the call.
    unsafe { slice::from_raw_parts(ptr, len as usize) }.to_vec()
}

/// Pins `bytes` in the output pool, records its length, and returns its
/// address. The length write is the final action, after the bytes are fully
/// addressable.
pub(crate) fn publish(bytes: Vec<u8>) -> *mut u8 {
    let mut pinned = bytes.into_boxed_slice();
    let ptr = pinned.as_mut_ptr();
    let len = pinned.len() as u32;
    OUTPUTS.with(|pool| pool.borrow_mut().push(pinned));
    LAST_LEN.with(|cell| cell.set(len));
    ptr
}

pub(crate) fn last_len() -> u32 {
    LAST_LEN.with(Cell::get)
}
