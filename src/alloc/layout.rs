//! Layout validation.

use std::alloc::Layout;

use crate::error::{Error, Result};

/// Build a layout for a block, rejecting requests no allocator can serve.
pub fn check_layout(size: usize, align: usize) -> Result<Layout> {
    if size == 0 {
        return Err(Error::InvalidArgument("block size must be non-zero".to_string()));
    }
    Layout::from_size_align(size, align).map_err(|e| {
        Error::InvalidArgument(format!("size {} with align {}: {}", size, align, e))
    })
}
