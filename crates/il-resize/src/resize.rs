use il_core::{BorderMode, Image, ImageView, sample_bilinear_u8};

/// Bilinear resize to `dst_w x dst_h`, rounding samples to nearest.
///
/// `scale_x`/`scale_y` are the destination-per-source factors used for the
/// pixel-center mapping. They are passed explicitly so callers that derive
/// the output size from a factor map coordinates with that exact factor.
pub fn resize_bilinear_u8(
    src: &ImageView<'_, u8>,
    dst_w: usize,
    dst_h: usize,
    scale_x: f32,
    scale_y: f32,
) -> Image<u8> {
    let mut dst = Image::new_fill(dst_w, dst_h, 0u8);
    if src.is_empty() || dst_w == 0 || dst_h == 0 {
        return dst;
    }

    let inv_x = 1.0 / scale_x;
    let inv_y = 1.0 / scale_y;
    let xs: Vec<f32> = (0..dst_w).map(|d| (d as f32 + 0.5) * inv_x - 0.5).collect();

    let data = dst.data_mut();
    for y in 0..dst_h {
        let sy = (y as f32 + 0.5) * inv_y - 0.5;
        let row = &mut data[y * dst_w..(y + 1) * dst_w];
        for (px, &sx) in row.iter_mut().zip(&xs) {
            let v = sample_bilinear_u8(src, sx, sy, BorderMode::Clamp);
            *px = v.round().clamp(0.0, 255.0) as u8;
        }
    }

    dst
}
