//! A reader that fences a sub-decoder within a declared byte budget

use crate::error::{Error, Result};
use crate::read::Read;

/// Wraps a borrowed reader and forbids consuming more than `limit` bytes through it.
///
/// Used to decode a map body: a malformed or malicious peer cannot make the map decoder
/// consume bytes belonging to the enclosing frame, because every read here is checked
/// against the map's own declared size. The bounded reader is only ever used for the
/// duration of a single map decode and must not be retained past that call.
pub struct BoundedReader<'a, R> {
    inner: &'a mut R,
    remaining: usize,
}

impl<'a, R: Read> BoundedReader<'a, R> {
    /// Creates a bounded view over `inner` that allows at most `limit` more bytes to be
    /// consumed.
    pub fn new(inner: &'a mut R, limit: usize) -> Self {
        Self {
            inner,
            remaining: limit,
        }
    }

    fn charge(&mut self, n: usize) -> Result<()> {
        if n > self.remaining {
            return Err(Error::LimitReached);
        }
        self.remaining -= n;
        Ok(())
    }
}

impl<'a, R: Read> Read for BoundedReader<'a, R> {
    fn remaining(&self) -> usize {
        self.remaining.min(self.inner.remaining())
    }

    fn peek_bytes(&self, n: usize) -> &[u8] {
        self.inner.peek_bytes(n.min(self.remaining))
    }

    fn read_one(&mut self) -> Result<u8> {
        self.charge(1)?;
        self.inner.read_one()
    }

    fn unread_one(&mut self, byte: u8) {
        self.remaining += 1;
        self.inner.unread_one(byte);
    }

    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.charge(n)?;
        self.inner.read_bytes(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::SliceReader;

    #[test]
    fn reads_within_limit_succeed() {
        let mut base = SliceReader::new(&[1, 2, 3, 4, 5]);
        let mut bounded = BoundedReader::new(&mut base, 3);
        assert_eq!(bounded.read_bytes(3).unwrap(), vec![1, 2, 3]);
        assert!(matches!(bounded.read_one(), Err(Error::LimitReached)));
    }

    #[test]
    fn a_single_read_past_the_limit_is_rejected() {
        let mut base = SliceReader::new(&[1, 2, 3, 4, 5]);
        let mut bounded = BoundedReader::new(&mut base, 5);
        assert!(matches!(bounded.read_bytes(7), Err(Error::LimitReached)));
    }
}
