//! Downscaling to a bounded working resolution for coarse search passes.
//!
//! Sizing policy:
//! - [`shrink_to_max_u8`] keeps the aspect ratio and brings the *smaller*
//!   dimension down to `max_dim` when it exceeds it.
//! - Output dimensions are `round(src * scale)`, never below 1.
//! - The returned `mult = 1 / scale` converts coarse coordinates back to
//!   source coordinates; it is exactly `1.0` when no resampling happened.
//!
//! Sampling uses pixel-center alignment: destination pixel `d` reads the
//! source at `(d + 0.5) / scale - 0.5` with clamped borders.

mod resize;
mod shrink;

pub use resize::resize_bilinear_u8;
pub use shrink::{Shrunk, shrink_to_max_u8};
