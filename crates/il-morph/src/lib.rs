//! Binary morphology and hole filling.
//!
//! Pixels are treated as binary with threshold `> 0`; outputs are `0` or
//! `255`. Structuring element taps that fall outside the image are ignored,
//! so erosion does not eat into objects touching the border.

mod fill;
mod morph;
mod structuring;

pub use fill::{Connectivity, fill_holes_u8, flood_fill_u8};
pub use morph::{close_binary_u8, dilate_binary_u8, erode_binary_u8, open_binary_u8};
pub use structuring::{SeShape, StructuringElement};
