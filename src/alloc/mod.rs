//! Raw allocation layer.
//!
//! This module contains the unmanaged block identity and the allocator
//! seam. Users should prefer the owning wrappers in the parent modules.

pub mod block;
pub mod layout;
pub mod raw;

pub use block::RawBlock;
pub use layout::check_layout;
pub use raw::{Global, RawAllocator};
