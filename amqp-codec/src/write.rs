//! Custom `Write` trait over an in-memory byte sink

/// A sequential byte sink that an encoder writes into.
pub trait Write {
    /// Append a single byte.
    fn write_one(&mut self, byte: u8);

    /// Append a slice of bytes.
    fn write_slice(&mut self, bytes: &[u8]);
}

impl Write for Vec<u8> {
    fn write_one(&mut self, byte: u8) {
        self.push(byte);
    }

    fn write_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl Write for bytes::BytesMut {
    fn write_one(&mut self, byte: u8) {
        self.extend_from_slice(&[byte]);
    }

    fn write_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}
