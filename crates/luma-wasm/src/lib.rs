//! wasm-bindgen bridge exposing the shared frame buffer + grayscale filter
//! to the JS host.
//!
//! The hot path is zero-copy: JS fetches the buffer's base address once via
//! [`frame_buffer_ptr`], blits raw RGBA bytes straight into linear memory,
//! calls [`apply_grayscale`], and reads the mutated bytes back through the
//! same address. [`write_frame`]/[`read_frame`] are a copying fallback for
//! hosts that prefer not to touch linear memory directly.
//!
//! Single-threaded by construction (`thread_local!` storage); callers own
//! sequencing and there is no internal locking.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use luma_filters::{
    grayscale_in_place, grayscale_range_in_place, FilterError, FrameBuffer, FRAME_BUFFER_CAPACITY,
};

#[cfg(target_arch = "wasm32")]
use js_sys::Uint8Array;

thread_local! {
    static FRAME: RefCell<FrameBuffer> = RefCell::new(FrameBuffer::new());
}

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Validate the signed dimensions coming over the JS boundary.
///
/// The export takes `i32` so JS callers can pass plain numbers; negative
/// values are rejected here rather than silently treated as zero.
fn checked_dimensions(width: i32, height: i32) -> luma_filters::Result<(u32, u32)> {
    if width < 0 || height < 0 {
        return Err(FilterError::NegativeDimension { width, height });
    }
    Ok((width as u32, height as u32))
}

fn apply_grayscale_inner(width: i32, height: i32) -> luma_filters::Result<()> {
    let (width, height) = checked_dimensions(width, height)?;
    FRAME.with(|frame| grayscale_in_place(frame.borrow_mut().as_mut_slice(), width, height))
}

fn apply_grayscale_range_inner(start_pixel: u32, end_pixel: u32) -> luma_filters::Result<()> {
    FRAME.with(|frame| {
        grayscale_range_in_place(frame.borrow_mut().as_mut_slice(), start_pixel, end_pixel)
    })
}

fn write_frame_inner(src: &[u8], offset: u32) -> luma_filters::Result<()> {
    FRAME.with(|frame| frame.borrow_mut().write(offset as usize, src))
}

/// Base address of the shared frame buffer inside linear memory.
///
/// Stable across calls: the buffer is allocated once on first access and
/// never resized or moved. JS overlays a `Uint8Array` view on
/// `wasm.memory.buffer` at this offset to read and write pixels without
/// copying.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn frame_buffer_ptr() -> u32 {
    FRAME.with(|frame| frame.borrow().base_ptr() as u32)
}

/// Capacity of the frame buffer in bytes (921,600 = 480x480 RGBA pixels).
///
/// Fixed at build time; `width * height * 4` must not exceed it.
#[wasm_bindgen]
pub fn frame_buffer_capacity() -> u32 {
    FRAME_BUFFER_CAPACITY as u32
}

/// Convert the first `width * height` RGBA pixels of the frame buffer to
/// BT.709 grayscale, in place. Alpha bytes are untouched.
///
/// Fails (without mutating) when a dimension is negative or
/// `width * height * 4` exceeds the buffer capacity.
#[wasm_bindgen]
pub fn apply_grayscale(width: i32, height: i32) -> Result<(), JsValue> {
    apply_grayscale_inner(width, height).map_err(to_js)
}

/// Convert pixels with index in `[start_pixel, end_pixel)` to grayscale,
/// in place.
///
/// Ranged variant of [`apply_grayscale`] so the host can shard one frame
/// across workers. An empty range is a successful no-op.
#[wasm_bindgen]
pub fn apply_grayscale_range(start_pixel: u32, end_pixel: u32) -> Result<(), JsValue> {
    apply_grayscale_range_inner(start_pixel, end_pixel).map_err(to_js)
}

/// Bounds-checked copy of `src` into the frame buffer at `offset`.
#[wasm_bindgen]
pub fn write_frame(src: &[u8], offset: u32) -> Result<(), JsValue> {
    write_frame_inner(src, offset).map_err(to_js)
}

/// Bounds-checked copy of `len` frame-buffer bytes starting at `offset`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn read_frame(offset: u32, len: u32) -> Result<Uint8Array, JsValue> {
    FRAME.with(|frame| {
        let frame = frame.borrow();
        let bytes = frame
            .read(offset as usize, len as usize)
            .map_err(to_js)?;
        Ok(Uint8Array::from(bytes))
    })
}
