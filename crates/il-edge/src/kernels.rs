//! Fixed integer kernels.
//!
//! Kernels are applied as correlations (not flipped), so a positive Sobel
//! response means intensity increases along the axis.

/// Binomial approximation of a Gaussian with `sigma ~= 1.1`; sums to 16.
pub const BINOMIAL5: [i32; 5] = [1, 4, 6, 4, 1];

/// Smoothing half of the 3x3 Sobel operator.
pub const SOBEL_SMOOTH3: [i32; 3] = [1, 2, 1];

/// Central-difference half of the 3x3 Sobel operator.
pub const SOBEL_DERIV3: [i32; 3] = [-1, 0, 1];

/// Right shift normalizing `BINOMIAL5` applied along both axes (16 * 16).
pub const BINOMIAL5_NORM_SHIFT: u32 = 8;
