#![forbid(unsafe_code)]

//! RGBA frame buffer + in-place grayscale kernels.
//!
//! The browser/WASM runtime stores one frame of RGBA8888 pixels as a contiguous
//! byte array ([`FrameBuffer`]) that the host writes into directly. The kernels
//! in [`grayscale`] convert a prefix (or pixel range) of that array to
//! ITU-R BT.709 luma, in place, leaving alpha untouched.
//!
//! Everything here is plain slice code with no wasm dependency so the exact
//! numeric behaviour is unit-testable on the host; the `luma-wasm` crate wires
//! it up to the JS boundary.

pub mod error;
pub mod frame;
pub mod grayscale;

pub use error::{FilterError, Result};
pub use frame::{FrameBuffer, FRAME_BUFFER_CAPACITY};
pub use grayscale::{grayscale_in_place, grayscale_range_in_place, luma_bt709};
