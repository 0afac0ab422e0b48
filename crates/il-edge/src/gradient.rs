use il_core::{BorderMode, Image, ImageView};

use crate::conv::correlate_separable_u8;
use crate::intensity::{average_u8, convert_scale_abs_i16, normalize_minmax_u8};
use crate::kernels::{SOBEL_DERIV3, SOBEL_SMOOTH3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    /// d/dx, responds to vertical edges.
    X,
    /// d/dy, responds to horizontal edges.
    Y,
}

/// Signed 3x3 Sobel derivative. Values lie in `[-1020, 1020]`.
pub fn sobel3x3_i16(src: &ImageView<'_, u8>, axis: GradientAxis) -> Image<i16> {
    let (kx, ky) = match axis {
        GradientAxis::X => (&SOBEL_DERIV3, &SOBEL_SMOOTH3),
        GradientAxis::Y => (&SOBEL_SMOOTH3, &SOBEL_DERIV3),
    };
    let acc = correlate_separable_u8(src, kx, ky, BorderMode::Reflect101);
    let data = acc.data().iter().map(|&v| v as i16).collect();
    Image::from_vec(acc.width(), acc.height(), data).expect("sobel keeps input dimensions")
}

/// Gradient-magnitude edge map.
///
/// `|gx|` and `|gy|` are saturated to `u8` and averaged instead of taking
/// `sqrt(gx² + gy²)`; the result is stretched to `[0, 255]`. Both edge
/// polarities score alike.
pub fn sobel_edge_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let ax = convert_scale_abs_i16(&sobel3x3_i16(src, GradientAxis::X).as_view());
    let ay = convert_scale_abs_i16(&sobel3x3_i16(src, GradientAxis::Y).as_view());
    let mag = average_u8(&ax.as_view(), &ay.as_view()).expect("gradients share dimensions");
    normalize_minmax_u8(&mag.as_view())
}
