//! Umbrella crate for the `iris-locate` workspace.
//!
//! Re-exports the image containers, the edge and morphology primitives, the
//! circle search, and the pupil pipeline built on top of them.

pub use il_core::*;
pub use il_edge::{
    GradientAxis, average_u8, bitwise_and_u8, convert_scale_abs_i16, gaussian5x5_u8, minmax_u8,
    normalize_minmax_u8, sobel_edge_u8, sobel3x3_i16, threshold_binary_u8,
};
pub use il_hough::*;
pub use il_morph::*;
pub use il_pupil::*;
pub use il_resize::*;
