//! Exclusively-owned heap handles.
//!
//! An [`Owner`] holds one heap block and gives it back to its allocator
//! exactly once. Ownership moves with [`Owner::transfer`] (or a plain Rust
//! move) and never duplicates: the handle is neither `Copy` nor `Clone`,
//! and a deep copy must be requested with [`Owner::try_clone`].
//!
//! # Example
//!
//! ```
//! use owner::{AutoRelease, Owner, OwnerOptions, Tracker};
//!
//! fn make_message_owner(tracker: &Tracker) -> owner::Result<Owner<Tracker>> {
//!     Owner::from_bytes_in(b"Some message", OwnerOptions::default(), tracker.clone())
//! }
//!
//! let tracker = Tracker::new();
//! {
//!     let a = AutoRelease::new(make_message_owner(&tracker)?);
//!     println!("a owns `{}`", String::from_utf8_lossy(a.message()?));
//!
//!     // Explicit deep copy: a second, independent block.
//!     let b = a.try_clone()?;
//!     assert_ne!(a.id(), b.id());
//! }
//!
//! let stats = tracker.stats();
//! assert_eq!(stats.allocations, 2);
//! assert_eq!(stats.releases, 2);
//! tracker.check()?;
//! # Ok::<(), owner::Error>(())
//! ```
//!
//! # Logging
//!
//! Construction, transfer and release are reported through the [`log`]
//! facade at `debug` level. The crate never installs a logger.

pub mod alloc;
pub mod auto;
pub mod error;
pub mod owner;
pub mod tracking;
pub mod types;
pub mod view;

// Re-export main types at the crate root
pub use crate::alloc::{Global, RawAllocator, RawBlock};
pub use crate::auto::AutoRelease;
pub use crate::error::{Error, Result};
pub use crate::owner::Owner;
pub use crate::tracking::Tracker;
pub use crate::types::{BlockId, Fill, OwnerOptions, State, Stats, DEFAULT_SIZE};
pub use crate::view::ResourceView;
