//! The exclusively-owning heap handle.

use std::fmt;
use std::mem;
use std::slice;

use log::{debug, trace};

use crate::alloc::{check_layout, Global, RawAllocator, RawBlock};
use crate::error::{Error, Result};
use crate::types::{BlockId, Fill, OwnerOptions, State};
use crate::view::{until_nul, ResourceView};

/// Exclusive owner of one heap block.
///
/// An `Owner` is either *owning* a live block or *empty*. It can only leave
/// the owning state by [`transfer`](Owner::transfer), by
/// [`release`](Owner::release), or by being dropped. The block is returned
/// to its allocator exactly once, however many times `release` is called
/// and whether or not the owner is dropped afterwards.
///
/// `Owner` is neither `Copy` nor `Clone`. Duplicating it is an explicit
/// deep copy through [`try_clone`](Owner::try_clone).
///
/// # Example
///
/// ```
/// use owner::Owner;
///
/// let mut a = Owner::new()?;
/// a.access()?.write_message(b"Some message")?;
///
/// // Hand ownership over; `a` is left empty.
/// let b = a.transfer();
/// assert!(!a.is_present());
/// assert_eq!(b.message()?, b"Some message");
///
/// // Releasing an empty owner is a no-op.
/// a.release();
/// # Ok::<(), owner::Error>(())
/// ```
///
/// A bitwise copy that leaves two owners of the same block cannot be
/// written; assignment moves the owner and the source is unusable:
///
/// ```compile_fail
/// let mut a = owner::Owner::new().unwrap();
/// let b = a;
/// a.release();
/// drop(b);
/// ```
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<owner::Owner>();
/// ```
pub struct Owner<A: RawAllocator = Global> {
    block: RawBlock,
    alloc: A,
}

impl Owner<Global> {
    /// Allocate a zeroed block of [`DEFAULT_SIZE`](crate::DEFAULT_SIZE) bytes.
    pub fn new() -> Result<Self> {
        Self::new_in(OwnerOptions::default(), Global)
    }

    /// Allocate a block described by `options`.
    pub fn with_options(options: OwnerOptions) -> Result<Self> {
        Self::new_in(options, Global)
    }

    /// Allocate a block holding `msg` followed by a NUL terminator.
    pub fn from_bytes(msg: &[u8]) -> Result<Self> {
        Self::from_bytes_in(msg, OwnerOptions::default(), Global)
    }
}

impl<A: RawAllocator> Owner<A> {
    /// Allocate a block described by `options` from `alloc`.
    pub fn new_in(options: OwnerOptions, alloc: A) -> Result<Self> {
        let layout = check_layout(options.size, options.align)?;
        let block = alloc.allocate(layout)?;

        // From here on, Drop gives the block back on every exit path.
        let mut owner = Self { block, alloc };
        match options.fill {
            Fill::Zeroed => owner.bytes_mut().fill(0),
            Fill::Byte(value) => owner.bytes_mut().fill(value),
            Fill::Uninit => {}
        }

        debug!("owner constructed: {:p} ({} bytes)", block.as_ptr(), block.len());
        Ok(owner)
    }

    /// Allocate a block from `alloc` holding `msg` followed by a NUL.
    ///
    /// The block is grown past `options.size` if the message needs it.
    pub fn from_bytes_in(msg: &[u8], options: OwnerOptions, alloc: A) -> Result<Self> {
        let options = OwnerOptions {
            size: options.size.max(msg.len() + 1),
            ..options
        };
        let mut owner = Self::new_in(options, alloc)?;
        owner.access()?.write_message(msg)?;
        Ok(owner)
    }

    /// Take ownership of a block previously obtained from `alloc`.
    ///
    /// # Safety
    ///
    /// `block` must be invalid, or have been allocated by `alloc` and not be
    /// owned by any other `Owner` or released since.
    pub unsafe fn from_raw_in(block: RawBlock, alloc: A) -> Self {
        Self { block, alloc }
    }

    /// Give up ownership without releasing, returning the raw block.
    ///
    /// The caller becomes responsible for handing it back to the allocator.
    pub fn into_raw(mut self) -> RawBlock {
        mem::take(&mut self.block)
    }

    /// Get read/write access to the owned bytes.
    pub fn access(&mut self) -> Result<ResourceView<'_>> {
        if !self.block.is_valid() {
            return Err(Error::UseAfterRelease);
        }
        Ok(ResourceView::new(self.bytes_mut()))
    }

    /// Get read-only access to the owned bytes.
    pub fn view(&self) -> Result<&[u8]> {
        if !self.block.is_valid() {
            return Err(Error::UseAfterRelease);
        }
        Ok(self.bytes())
    }

    /// Bytes up to the first NUL.
    pub fn message(&self) -> Result<&[u8]> {
        self.view().map(until_nul)
    }

    /// Give the block back to the allocator.
    ///
    /// Does nothing if the owner is already empty. Never fails.
    pub fn release(&mut self) {
        if !self.block.is_valid() {
            trace!("owner already empty, nothing to release");
            return;
        }

        // Empty the handle before freeing so no path can see the block twice.
        let block = mem::take(&mut self.block);
        debug!("owner destructed: {:p}", block.as_ptr());
        unsafe { self.alloc.release(block) };
    }

    /// Whether the owner currently holds a block.
    pub fn is_present(&self) -> bool {
        self.block.is_valid()
    }

    pub fn state(&self) -> State {
        if self.is_present() {
            State::Owning
        } else {
            State::Empty
        }
    }

    /// Identity of the owned block, or `None` when empty.
    pub fn id(&self) -> Option<BlockId> {
        self.block.id()
    }

    /// Size of the owned block; zero when empty.
    pub fn len(&self) -> usize {
        if self.is_present() {
            self.block.len()
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The allocator this owner releases into.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    fn bytes(&self) -> &[u8] {
        debug_assert!(self.block.is_valid());
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.block.len()) }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        debug_assert!(self.block.is_valid());
        unsafe { slice::from_raw_parts_mut(self.block.as_ptr(), self.block.len()) }
    }
}

impl<A: RawAllocator + Clone> Owner<A> {
    /// Move ownership into a new handle, leaving this one empty.
    ///
    /// Nothing is allocated or freed. Moving an empty owner yields another
    /// empty owner.
    pub fn transfer(&mut self) -> Self {
        let block = mem::take(&mut self.block);
        if block.is_valid() {
            debug!("owner transferred: {:p}", block.as_ptr());
        }
        Self {
            block,
            alloc: self.alloc.clone(),
        }
    }

    /// Deep copy: allocate a new block with the same contents.
    ///
    /// The copy has its own identity and is released independently.
    pub fn try_clone(&self) -> Result<Self> {
        let src = self.view()?;
        let options = OwnerOptions {
            size: self.block.len(),
            align: self.block.align(),
            fill: Fill::Uninit,
        };
        let mut copy = Self::new_in(options, self.alloc.clone())?;
        copy.bytes_mut().copy_from_slice(src);
        Ok(copy)
    }
}

impl<A: RawAllocator> Drop for Owner<A> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<A: RawAllocator> fmt::Debug for Owner<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("state", &self.state())
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}

// Owner has exclusive access to its block, so it follows its allocator.
unsafe impl<A: RawAllocator + Send> Send for Owner<A> {}
unsafe impl<A: RawAllocator + Sync> Sync for Owner<A> {}
