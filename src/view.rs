//! Borrowed access to an owned block.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// Read/write view of the bytes owned by an [`Owner`](crate::Owner).
///
/// The view borrows the owner mutably, so the owner cannot be released or
/// transferred while the view is alive.
#[derive(Debug)]
pub struct ResourceView<'a> {
    bytes: &'a mut [u8],
}

impl<'a> ResourceView<'a> {
    pub(crate) fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// Copy `msg` to the start of the block, followed by a NUL terminator.
    pub fn write_message(&mut self, msg: &[u8]) -> Result<()> {
        if msg.len() >= self.bytes.len() {
            return Err(Error::InvalidArgument(format!(
                "message of {} bytes does not fit a {} byte block",
                msg.len(),
                self.bytes.len()
            )));
        }
        self.bytes[..msg.len()].copy_from_slice(msg);
        self.bytes[msg.len()] = 0;
        Ok(())
    }

    /// Bytes up to the first NUL, or the whole block if there is none.
    pub fn message(&self) -> &[u8] {
        until_nul(self.bytes)
    }

    /// Set every byte to `value`.
    pub fn fill(&mut self, value: u8) {
        self.bytes.fill(value);
    }
}

impl Deref for ResourceView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl DerefMut for ResourceView<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.bytes
    }
}

pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_message() {
        let mut buf = [0xffu8; 16];
        let mut view = ResourceView::new(&mut buf);
        view.write_message(b"Some message").unwrap();
        assert_eq!(view.message(), b"Some message");
        assert_eq!(view[12], 0);
    }

    #[test]
    fn test_write_message_needs_room_for_nul() {
        let mut buf = [0u8; 4];
        let mut view = ResourceView::new(&mut buf);
        assert!(view.write_message(b"abcd").is_err());
        assert!(view.write_message(b"abc").is_ok());
    }

    #[test]
    fn test_message_without_nul() {
        let mut buf = *b"full";
        let view = ResourceView::new(&mut buf);
        assert_eq!(view.message(), b"full");
    }
}
