use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

/// Unified error type for frame-buffer and filter operations.
///
/// Every entry point validates before touching the buffer and fails with one
/// of these variants, so a failed call mutates nothing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("dimensions out of range: width={width} height={height} capacity={capacity}")]
    DimensionsOutOfRange {
        width: u32,
        height: u32,
        capacity: usize,
    },

    #[error("negative dimension: width={width} height={height}")]
    NegativeDimension { width: i32, height: i32 },

    #[error("pixel range out of bounds: start={start_pixel} end={end_pixel} capacity={capacity}")]
    RangeOutOfBounds {
        start_pixel: u32,
        end_pixel: u32,
        capacity: usize,
    },

    #[error("out of bounds: offset={offset} len={len} capacity={capacity}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}
