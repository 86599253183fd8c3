//! Process-wide scratch buffer pool
//!
//! Composite and collection encoding assembles each field/element into its own byte
//! buffer before the final size is known. Reusing these buffers instead of allocating
//! fresh `Vec`s on every encode call avoids churn on busy connections. The pool is a
//! simple `parking_lot::Mutex`-guarded free list, the same primitive the source uses to
//! guard session/link state.

use std::ops::DerefMut;

use parking_lot::Mutex;

static POOL: Mutex<Vec<Vec<u8>>> = Mutex::new(Vec::new());

/// A pooled scratch buffer. Returned to the pool on drop.
pub struct PooledBuffer {
    buf: Option<Vec<u8>>,
}

impl PooledBuffer {
    /// Clears any leftover bytes so the caller starts from an empty buffer.
    fn reset(mut buf: Vec<u8>) -> Vec<u8> {
        buf.clear();
        buf
    }

    /// Takes ownership of the encoded bytes without returning the buffer to the pool.
    ///
    /// Used once a buffer's contents must outlive the call that filled it (e.g. a
    /// composite field body stashed into a schema's field list); the allocation is lost
    /// to the pool, which only costs a future `acquire` an allocation, never correctness.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.take().expect("buffer taken before drop")
    }
}

impl crate::write::Write for PooledBuffer {
    fn write_one(&mut self, byte: u8) {
        self.deref_mut().write_one(byte);
    }

    fn write_slice(&mut self, bytes: &[u8]) {
        self.deref_mut().write_slice(bytes);
    }
}

impl std::ops::Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        self.buf.as_ref().expect("buffer taken before drop")
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        self.buf.as_mut().expect("buffer taken before drop")
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            POOL.lock().push(buf);
        }
    }
}

/// Acquires a scratch buffer from the pool, allocating a new one if the pool is empty.
/// The returned buffer is always empty regardless of what the previous owner left in it.
pub fn acquire() -> PooledBuffer {
    let buf = POOL.lock().pop().unwrap_or_default();
    PooledBuffer {
        buf: Some(PooledBuffer::reset(buf)),
    }
}
