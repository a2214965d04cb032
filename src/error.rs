//! Error types for the owner crate.

use thiserror::Error;

/// Result type alias for owner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for owner operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The allocator could not provide the requested block.
    #[error("allocation of {size} bytes (align {align}) failed")]
    Allocation {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment.
        align: usize,
    },

    /// The handle is empty: it was released or its ownership was transferred.
    #[error("use after release")]
    UseAfterRelease,

    /// A block was handed back to the allocator more than once.
    ///
    /// Only the tracking allocator can observe this; a correctly used
    /// [`Owner`](crate::Owner) never produces it.
    #[error("double release of block at {addr:#x}")]
    DoubleRelease {
        /// Address of the block.
        addr: usize,
    },

    /// Blocks are still live when none were expected.
    #[error("{live} block(s) never released")]
    Leak {
        /// Number of live blocks.
        live: usize,
    },

    /// Function argument is invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Check if this is an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::Allocation { .. })
    }

    /// Check if this is a use-after-release error.
    pub fn is_use_after_release(&self) -> bool {
        matches!(self, Error::UseAfterRelease)
    }

    /// Check if this is a double release error.
    pub fn is_double_release(&self) -> bool {
        matches!(self, Error::DoubleRelease { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::Allocation { size: 69, align: 1 };
        assert_eq!(err.to_string(), "allocation of 69 bytes (align 1) failed");

        let err = Error::DoubleRelease { addr: 0x1000 };
        assert_eq!(err.to_string(), "double release of block at 0x1000");
    }

    #[test]
    fn test_predicates() {
        assert!(Error::UseAfterRelease.is_use_after_release());
        assert!(!Error::UseAfterRelease.is_allocation());
        assert!(Error::DoubleRelease { addr: 1 }.is_double_release());
    }
}
