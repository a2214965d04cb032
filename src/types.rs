//! Type definitions and options.

use std::fmt;

/// Size of a block allocated with default options.
pub const DEFAULT_SIZE: usize = 69;

/// How a freshly allocated block is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// Every byte set to zero.
    #[default]
    Zeroed,
    /// Leave the allocator's initial contents alone.
    Uninit,
    /// Every byte set to the given value.
    Byte(u8),
}

/// Options for creating an [`Owner`](crate::Owner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerOptions {
    /// Block size in bytes. Must be non-zero.
    pub size: usize,
    /// Block alignment. Must be a power of two.
    pub align: usize,
    /// Initial contents.
    pub fill: Fill,
}

impl Default for OwnerOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            align: 1,
            fill: Fill::Zeroed,
        }
    }
}

/// Identity of an allocation: the address of its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    /// Get the raw address.
    pub fn addr(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Ownership state of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The handle owns a live block.
    Owning,
    /// The handle was released or transferred away.
    Empty,
}

/// Counters kept by a [`Tracker`](crate::Tracker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Successful allocations.
    pub allocations: usize,
    /// Allocation requests that were refused.
    pub failed_allocations: usize,
    /// Physical deallocations forwarded to the system allocator.
    pub releases: usize,
    /// Release attempts on blocks that were not live.
    pub double_releases: usize,
    /// Blocks currently allocated.
    pub live: usize,
    /// Bytes currently allocated.
    pub live_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = OwnerOptions::default();
        assert_eq!(opts.size, 69);
        assert_eq!(opts.align, 1);
        assert_eq!(opts.fill, Fill::Zeroed);
    }

    #[test]
    fn test_block_id_display() {
        assert_eq!(BlockId(0xdead).to_string(), "0xdead");
    }
}
