#![cfg_attr(not(test), no_std)]

// This library encodes wall-clock time into the fixed-width payloads used by
// the BLE time-related GATT characteristics:
//
// CurrentTime   -> 9 bytes (Current Time characteristic, 0x2A2B)
// ShortTime     -> 6 bytes (truncated variant some devices expect)
// LocalTimeInfo -> 2 bytes (Local Time Information characteristic, 0x2A0F)
//
// The caller supplies calendar fields and raw timezone/DST values (typically
// read from the OS timezone database); this library never computes them.
// All multi-byte integers are little-endian on the wire.
// The starting point for using this library is characteristic::CurrentTime.

// Characteristic payloads
pub mod characteristic;

// Common functions and constants
pub mod common;

#[cfg(feature = "alloc")]
extern crate alloc;

/// A byte sink for assembling characteristic payloads into a caller-owned
/// buffer. Writing past the end of the buffer is a caller bug and panics.
pub struct Writer<'a> {
    pub buf: &'a mut [u8],
    pub index: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, index: 0 }
    }

    pub fn push(&mut self, item: u8) {
        self.buf[self.index] = item;
        self.index += 1;
    }

    pub fn extend_from_slice(&mut self, src: &[u8]) {
        assert!(src.len() <= self.buf.len() - self.index);
        self.buf[self.index..self.index + src.len()].copy_from_slice(src);
        self.index += src.len();
    }

    pub fn to_bytes(&self) -> &[u8] {
        &self.buf[..self.index]
    }
}
