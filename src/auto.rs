//! Scoped auto-release decorator.

use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;

use log::debug;

use crate::alloc::{Global, RawAllocator};
use crate::error::Result;
use crate::owner::Owner;
use crate::types::OwnerOptions;

/// Releases the embedded [`Owner`] when the scope ends.
///
/// The decorator holds the owner itself rather than a second record of the
/// same block, so wrapping never changes how many times the block is
/// released. It derefs to the owner and, like it, cannot be cloned.
///
/// # Example
///
/// ```
/// use owner::{AutoRelease, Owner};
///
/// let scoped = AutoRelease::new(Owner::from_bytes(b"Some message")?);
/// assert_eq!(scoped.message()?, b"Some message");
///
/// // Taking the owner back out skips the scoped release.
/// let inner = scoped.into_inner();
/// assert!(inner.is_present());
/// # Ok::<(), owner::Error>(())
/// ```
pub struct AutoRelease<A: RawAllocator = Global> {
    inner: Owner<A>,
}

impl AutoRelease<Global> {
    /// Allocate a default block and wrap it.
    pub fn create() -> Result<Self> {
        Owner::new().map(Self::new)
    }
}

impl<A: RawAllocator> AutoRelease<A> {
    pub fn new(inner: Owner<A>) -> Self {
        Self { inner }
    }

    /// Allocate a block from `alloc` and wrap it.
    pub fn create_in(options: OwnerOptions, alloc: A) -> Result<Self> {
        Owner::new_in(options, alloc).map(Self::new)
    }

    /// Unwrap, handing back the same owner without releasing it.
    pub fn into_inner(self) -> Owner<A> {
        let inner = unsafe { ptr::read(&self.inner) };
        // Don't drop self - the owner now belongs to the caller
        mem::forget(self);
        inner
    }
}

impl<A: RawAllocator> Deref for AutoRelease<A> {
    type Target = Owner<A>;

    fn deref(&self) -> &Owner<A> {
        &self.inner
    }
}

impl<A: RawAllocator> DerefMut for AutoRelease<A> {
    fn deref_mut(&mut self) -> &mut Owner<A> {
        &mut self.inner
    }
}

impl<A: RawAllocator> Drop for AutoRelease<A> {
    fn drop(&mut self) {
        if let Some(id) = self.inner.id() {
            debug!("scope ended, auto-releasing {}", id);
        }
        self.inner.release();
    }
}
