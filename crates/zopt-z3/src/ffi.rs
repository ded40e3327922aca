//! Low-level helpers shared by the Z3 wrappers.
//!
//! This module contains unsafe code for reading strings owned by the C library.
#![allow(unsafe_code)]

use std::ffi::CStr;
use z3_sys::{Z3_get_estimated_alloc_size, Z3_get_full_version, Z3_string};

/// Copy a string owned by Z3 into Rust.
///
/// Returns `None` for a null pointer or non UTF-8 content.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated buffer that stays valid
/// for the duration of this call. Z3 keeps returned strings alive until the
/// next API call on the same context.
pub(crate) unsafe fn engine_string(ptr: Z3_string) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .ok()
        .map(str::to_string)
}

/// Return the full Z3 version string, if available.
pub fn z3_version() -> Option<String> {
    unsafe { engine_string(Z3_get_full_version()) }
}

/// Bytes currently allocated by Z3, as tracked by its own allocator.
///
/// Useful as a leak diagnostic: releasing every handle created since a
/// previous reading brings the value back near that reading.
pub fn estimated_alloc_size() -> u64 {
    unsafe { Z3_get_estimated_alloc_size() }
}
