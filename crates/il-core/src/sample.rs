use crate::border::{BorderMode, map_index};
use crate::image::ImageView;

/// Bilinear interpolation at pixel-center coordinates `(x, y)`.
///
/// Uses the floor-based 2x2 neighbourhood; out-of-range neighbours are
/// remapped through `border`. Panics on an empty image.
pub fn sample_bilinear_u8(img: &ImageView<'_, u8>, x: f32, y: f32, border: BorderMode) -> f32 {
    assert!(!img.is_empty(), "cannot sample an empty image");

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let p00 = fetch(img, x0, y0, border);
    let p10 = fetch(img, x0 + 1, y0, border);
    let p01 = fetch(img, x0, y0 + 1, border);
    let p11 = fetch(img, x0 + 1, y0 + 1, border);

    let top = p00 * (1.0 - dx) + p10 * dx;
    let bottom = p01 * (1.0 - dx) + p11 * dx;
    top * (1.0 - dy) + bottom * dy
}

#[inline]
fn fetch(img: &ImageView<'_, u8>, x: isize, y: isize, border: BorderMode) -> f32 {
    let xi = map_index(x, img.width(), border).expect("non-empty width");
    let yi = map_index(y, img.height(), border).expect("non-empty height");
    // SAFETY: `map_index` returns indices in `[0, len)` for non-empty axes.
    unsafe { *img.get_unchecked(xi, yi) as f32 }
}
