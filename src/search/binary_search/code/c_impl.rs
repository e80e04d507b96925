//! FFI binding for the C implementation of binary search.

mod ffi {
    extern "C" {
        pub fn binary_search_c_original(
            data: *const i32,
            len: libc::size_t,
            target: i32,
        ) -> libc::ptrdiff_t;
    }
}

/// Wrapper over the C port of the `original` loop
pub fn binary_search_c_original(sequence: &[i32], target: &i32) -> Option<usize> {
    // SAFETY: the pointer/length pair comes from a live slice; the C code only
    // reads indices below `len`.
    let index = unsafe { ffi::binary_search_c_original(sequence.as_ptr(), sequence.len(), *target) };
    super::from_sentinel(index as i64)
}
