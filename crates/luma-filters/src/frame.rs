use crate::error::{FilterError, Result};

/// Capacity of the shared frame buffer in bytes.
///
/// Exactly 480x480 RGBA pixels at 4 bytes/pixel; any width x height whose
/// total byte count fits is valid. Fixed at build time.
pub const FRAME_BUFFER_CAPACITY: usize = 921_600;

/// Fixed-capacity RGBA pixel store.
///
/// The backing allocation is made once at construction and never resized or
/// moved, so the base address stays stable for the lifetime of the value —
/// the WASM bridge hands that address to JS so the host can write raw pixel
/// bytes into linear memory and read results back without copying.
///
/// Contents persist across filter invocations; there is no reset. Callers are
/// responsible for writing fresh pixel data before relying on filter output.
pub struct FrameBuffer {
    data: Box<[u8]>,
}

impl FrameBuffer {
    /// Allocate a zero-filled buffer of [`FRAME_BUFFER_CAPACITY`] bytes.
    pub fn new() -> Self {
        Self {
            data: vec![0u8; FRAME_BUFFER_CAPACITY].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Base address of the backing storage. Stable across calls.
    pub fn base_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Bounds-checked copy of `src` into the buffer at `offset`.
    ///
    /// Copying fallback for hosts that do not address linear memory directly;
    /// the zero-copy path is `base_ptr` + direct writes.
    pub fn write(&mut self, offset: usize, src: &[u8]) -> Result<()> {
        let end = offset
            .checked_add(src.len())
            .filter(|&end| end <= self.data.len())
            .ok_or(FilterError::OutOfBounds {
                offset,
                len: src.len(),
                capacity: self.data.len(),
            })?;
        self.data[offset..end].copy_from_slice(src);
        Ok(())
    }

    /// Bounds-checked view of `len` bytes starting at `offset`.
    pub fn read(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(FilterError::OutOfBounds {
                offset,
                len,
                capacity: self.data.len(),
            })?;
        Ok(&self.data[offset..end])
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_zero_filled_at_full_capacity() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.capacity(), FRAME_BUFFER_CAPACITY);
        assert_eq!(frame.capacity(), 480 * 480 * 4);
        assert!(frame.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn base_ptr_is_stable_across_calls() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.base_ptr(), frame.base_ptr());
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut frame = FrameBuffer::new();
        frame.write(16, &[1, 2, 3, 4]).unwrap();
        assert_eq!(frame.read(16, 4).unwrap(), &[1, 2, 3, 4]);
        // Neighbouring bytes stay zero.
        assert_eq!(frame.read(12, 4).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(frame.read(20, 4).unwrap(), &[0, 0, 0, 0]);
    }

    #[test]
    fn contents_persist_across_reads() {
        let mut frame = FrameBuffer::new();
        frame.write(0, &[0xaa; 8]).unwrap();
        let _ = frame.read(0, 8).unwrap();
        assert_eq!(frame.read(0, 8).unwrap(), &[0xaa; 8]);
    }

    #[test]
    fn write_past_capacity_is_rejected() {
        let mut frame = FrameBuffer::new();
        let err = frame.write(FRAME_BUFFER_CAPACITY - 2, &[0; 4]).unwrap_err();
        assert_eq!(
            err,
            FilterError::OutOfBounds {
                offset: FRAME_BUFFER_CAPACITY - 2,
                len: 4,
                capacity: FRAME_BUFFER_CAPACITY,
            }
        );
    }

    #[test]
    fn read_with_overflowing_range_is_rejected() {
        let frame = FrameBuffer::new();
        assert!(frame.read(usize::MAX, 2).is_err());
        assert!(frame.read(0, FRAME_BUFFER_CAPACITY + 1).is_err());
    }

    #[test]
    fn writes_at_the_exact_end_are_accepted() {
        let mut frame = FrameBuffer::new();
        frame.write(FRAME_BUFFER_CAPACITY - 4, &[9; 4]).unwrap();
        assert_eq!(frame.read(FRAME_BUFFER_CAPACITY - 4, 4).unwrap(), &[9; 4]);
    }
}
