//! Intensity and gradient primitives feeding the pupil edge maps.
//!
//! All operators take borrowed [`il_core::ImageView`]s and return freshly
//! allocated images; inputs are never modified.
//!
//! Rounding follows a single rule per stage so results are reproducible:
//! - floating-point rescaling rounds half to even;
//! - the integer 5x5 Gaussian rounds half up on its final `/256`.
//!
//! Neighbourhood filters use reflect-101 borders.

pub mod conv;
pub mod gradient;
pub mod intensity;
pub mod kernels;
pub mod smooth;

pub use gradient::{GradientAxis, sobel_edge_u8, sobel3x3_i16};
pub use intensity::{
    average_u8, bitwise_and_u8, convert_scale_abs_i16, minmax_u8, normalize_minmax_u8,
    threshold_binary_u8,
};
pub use smooth::gaussian5x5_u8;
