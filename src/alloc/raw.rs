//! The allocator seam and the system-backed default.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use log::trace;

use super::block::RawBlock;
use crate::error::{Error, Result};

/// Source of raw blocks for an [`Owner`](crate::Owner).
///
/// # Safety
///
/// Implementors must guarantee that:
/// - A block returned by `allocate` is at least `layout.size()` bytes,
///   aligned to `layout.align()`, fully initialised, and stays valid until
///   it is passed to `release`.
/// - `release` is the only place the block's memory is given back.
pub unsafe trait RawAllocator {
    /// Allocate a block for `layout`.
    fn allocate(&self, layout: Layout) -> Result<RawBlock>;

    /// Give a block back.
    ///
    /// # Safety
    ///
    /// `block` must have come from `allocate` on this allocator.
    unsafe fn release(&self, block: RawBlock);
}

/// The system allocator. Blocks are zeroed on allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<RawBlock> {
        if layout.size() == 0 {
            return Err(Error::InvalidArgument("block size must be non-zero".to_string()));
        }

        let ptr = unsafe { alloc::alloc_zeroed(layout) };
        match NonNull::new(ptr) {
            Some(ptr) => {
                trace!("global: allocated {} bytes at {:p}", layout.size(), ptr);
                Ok(RawBlock::new(ptr, layout))
            }
            None => Err(Error::Allocation {
                size: layout.size(),
                align: layout.align(),
            }),
        }
    }

    unsafe fn release(&self, block: RawBlock) {
        if let Some(layout) = block.layout() {
            trace!("global: freeing {} bytes at {:p}", layout.size(), block.as_ptr());
            alloc::dealloc(block.as_ptr(), layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_roundtrip() {
        let layout = Layout::from_size_align(32, 8).unwrap();
        let block = Global.allocate(layout).unwrap();
        assert!(block.is_valid());
        assert_eq!(block.len(), 32);
        assert_eq!(block.as_ptr() as usize % 8, 0);

        let bytes = unsafe { std::slice::from_raw_parts(block.as_ptr(), block.len()) };
        assert!(bytes.iter().all(|&b| b == 0));

        unsafe { Global.release(block) };
    }

    #[test]
    fn test_global_release_invalid_is_noop() {
        unsafe { Global.release(RawBlock::invalid()) };
    }
}
