//! Foundational image primitives for iris-locate.
//!
//! ## Buffers and Views
//! [`Image`] owns a contiguous row-major buffer. [`ImageView`] and
//! [`ImageViewMut`] borrow pixel data with an element stride (not byte
//! stride) so they can wrap padded buffers handed over by decoders.
//!
//! Pixel depth is a type parameter: `u8` for intensity and binary masks,
//! `i16` for signed gradients, `u16` for vote accumulators.
//!
//! ## Coordinates
//! `x` is the column and `y` the row. Integer coordinates address pixel
//! centers.
//!
//! ## Border Modes
//! Neighbourhood operations either clamp to the edge pixel or use reflect-101,
//! which mirrors around edge pixels without repeating them.

mod border;
mod error;
mod image;
mod sample;

pub use border::{BorderMode, map_index};
pub use error::Error;
pub use image::{Image, ImageView, ImageViewMut};
pub use sample::sample_bilinear_u8;
