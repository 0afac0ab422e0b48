use il_core::{Error, Image, ImageView};

/// Smallest and largest sample, or `None` for an empty view.
pub fn minmax_u8(src: &ImageView<'_, u8>) -> Option<(u8, u8)> {
    if src.is_empty() {
        return None;
    }

    let mut lo = u8::MAX;
    let mut hi = u8::MIN;
    for y in 0..src.height() {
        for &v in src.row(y) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    Some((lo, hi))
}

/// Linearly stretches intensities so `min -> 0` and `max -> 255`.
///
/// A constant image has no range to stretch and maps to all zeros.
pub fn normalize_minmax_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let mut out = Image::new_fill(src.width(), src.height(), 0u8);
    let Some((lo, hi)) = minmax_u8(src) else {
        return out;
    };
    if lo == hi {
        return out;
    }

    let scale = 255.0f64 / f64::from(hi - lo);
    let w = src.width();
    let dst = out.data_mut();
    for y in 0..src.height() {
        for (x, &v) in src.row(y).iter().enumerate() {
            let s = (f64::from(v - lo) * scale).round_ties_even();
            dst[y * w + x] = s.clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// `v > thresh -> max_value`, everything else `0`.
pub fn threshold_binary_u8(src: &ImageView<'_, u8>, thresh: u8, max_value: u8) -> Image<u8> {
    map_u8(src, |v| if v > thresh { max_value } else { 0 })
}

/// Absolute value saturated to `u8`.
pub fn convert_scale_abs_i16(src: &ImageView<'_, i16>) -> Image<u8> {
    let mut data = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        data.extend(src.row(y).iter().map(|&v| v.unsigned_abs().min(255) as u8));
    }
    Image::from_vec(src.width(), src.height(), data).expect("dimensions preserved")
}

/// Pixelwise `(a + b) / 2`, rounding half to even.
pub fn average_u8(a: &ImageView<'_, u8>, b: &ImageView<'_, u8>) -> Result<Image<u8>, Error> {
    zip_u8(a, b, |pa, pb| {
        let s = u16::from(pa) + u16::from(pb);
        let q = s / 2;
        let odd_tie = s % 2 == 1 && q % 2 == 1;
        (q + u16::from(odd_tie)) as u8
    })
}

/// Pixelwise bitwise AND.
pub fn bitwise_and_u8(a: &ImageView<'_, u8>, b: &ImageView<'_, u8>) -> Result<Image<u8>, Error> {
    zip_u8(a, b, |pa, pb| pa & pb)
}

fn map_u8(src: &ImageView<'_, u8>, f: impl Fn(u8) -> u8) -> Image<u8> {
    let mut data = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        data.extend(src.row(y).iter().map(|&v| f(v)));
    }
    Image::from_vec(src.width(), src.height(), data).expect("dimensions preserved")
}

fn zip_u8(
    a: &ImageView<'_, u8>,
    b: &ImageView<'_, u8>,
    f: impl Fn(u8, u8) -> u8,
) -> Result<Image<u8>, Error> {
    if a.dims() != b.dims() {
        return Err(Error::DimensionMismatch {
            expected: a.dims(),
            actual: b.dims(),
        });
    }

    let mut data = Vec::with_capacity(a.width() * a.height());
    for y in 0..a.height() {
        data.extend(a.row(y).iter().zip(b.row(y)).map(|(&pa, &pb)| f(pa, pb)));
    }
    Image::from_vec(a.width(), a.height(), data)
}

#[cfg(test)]
mod tests {
    use il_core::{Error, Image};

    use super::{
        average_u8, bitwise_and_u8, convert_scale_abs_i16, minmax_u8, normalize_minmax_u8,
        threshold_binary_u8,
    };

    #[test]
    fn normalize_stretches_to_full_range() {
        let img = Image::from_vec(3, 1, vec![10u8, 20, 30]).expect("valid image");
        let out = normalize_minmax_u8(&img.as_view());
        // 127.5 rounds to the even neighbour.
        assert_eq!(out.data(), &[0, 128, 255]);
    }

    #[test]
    fn normalize_constant_image_is_zero() {
        let img = Image::new_fill(4, 4, 117u8);
        let out = normalize_minmax_u8(&img.as_view());
        assert!(out.data().iter().all(|&v| v == 0));
        assert_eq!(minmax_u8(&img.as_view()), Some((117, 117)));
    }

    #[test]
    fn threshold_is_strictly_greater() {
        let img = Image::from_vec(4, 1, vec![0u8, 25, 26, 255]).expect("valid image");
        let out = threshold_binary_u8(&img.as_view(), 25, 255);
        assert_eq!(out.data(), &[0, 0, 255, 255]);
    }

    #[test]
    fn abs_saturates() {
        let img = Image::from_vec(4, 1, vec![-1020i16, -3, 200, 300]).expect("valid image");
        let out = convert_scale_abs_i16(&img.as_view());
        assert_eq!(out.data(), &[255, 3, 200, 255]);
    }

    #[test]
    fn average_rounds_half_to_even() {
        let a = Image::from_vec(4, 1, vec![0u8, 1, 2, 255]).expect("valid image");
        let b = Image::from_vec(4, 1, vec![1u8, 2, 2, 0]).expect("valid image");
        let out = average_u8(&a.as_view(), &b.as_view()).expect("same size");
        // 0.5 -> 0, 1.5 -> 2, 2 -> 2, 127.5 -> 128
        assert_eq!(out.data(), &[0, 2, 2, 128]);
    }

    #[test]
    fn and_rejects_mismatched_sizes() {
        let a = Image::new_fill(3, 2, 255u8);
        let b = Image::new_fill(2, 3, 255u8);
        assert_eq!(
            bitwise_and_u8(&a.as_view(), &b.as_view()).unwrap_err(),
            Error::DimensionMismatch {
                expected: (3, 2),
                actual: (2, 3)
            }
        );

        let c = Image::from_vec(3, 2, vec![0xF0u8, 0x0F, 0xFF, 0, 1, 128]).expect("valid image");
        let out = bitwise_and_u8(&a.as_view(), &c.as_view()).expect("same size");
        assert_eq!(out.data(), c.data());
    }
}
