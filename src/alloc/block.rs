//! Unmanaged identity of one heap allocation.

use std::alloc::Layout;
use std::ptr::{self, NonNull};

use crate::types::BlockId;

/// Pointer, size and alignment of one allocation.
///
/// A `RawBlock` is `Copy` and never frees anything on its own: copying it
/// copies the address, not the responsibility for releasing it. That
/// responsibility lives in [`Owner`](crate::Owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock {
    ptr: *mut u8,
    size: usize,
    align: usize,
}

impl RawBlock {
    /// Create an invalid (null) block.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            ptr: ptr::null_mut(),
            size: 0,
            align: 1,
        }
    }

    /// Describe an allocation made with `layout`.
    #[inline]
    pub fn new(ptr: NonNull<u8>, layout: Layout) -> Self {
        Self {
            ptr: ptr.as_ptr(),
            size: layout.size(),
            align: layout.align(),
        }
    }

    /// Check if this block is valid (non-null).
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.ptr.is_null()
    }

    #[inline]
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }

    /// Layout the block was allocated with, if it is valid.
    pub fn layout(&self) -> Option<Layout> {
        if !self.is_valid() {
            return None;
        }
        Layout::from_size_align(self.size, self.align).ok()
    }

    /// Address of the block, if it is valid.
    pub fn id(&self) -> Option<BlockId> {
        self.is_valid().then(|| BlockId(self.ptr as usize))
    }
}

impl Default for RawBlock {
    fn default() -> Self {
        Self::invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_block() {
        let block = RawBlock::default();
        assert!(!block.is_valid());
        assert_eq!(block.id(), None);
        assert_eq!(block.layout(), None);
    }

    #[test]
    fn test_copy_keeps_identity() {
        let mut byte = 0u8;
        let layout = Layout::new::<u8>();
        let a = RawBlock::new(NonNull::from(&mut byte), layout);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
        assert_eq!(b.layout(), Some(layout));
    }
}
