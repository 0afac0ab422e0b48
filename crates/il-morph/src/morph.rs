use il_core::{Image, ImageView};

use crate::structuring::StructuringElement;

#[derive(Clone, Copy)]
enum Op {
    Erode,
    Dilate,
}

pub fn erode_binary_u8(src: &ImageView<'_, u8>, se: &StructuringElement) -> Image<u8> {
    apply(src, se, Op::Erode)
}

pub fn dilate_binary_u8(src: &ImageView<'_, u8>, se: &StructuringElement) -> Image<u8> {
    apply(src, se, Op::Dilate)
}

/// Erosion then dilation: removes specks smaller than `se`.
pub fn open_binary_u8(src: &ImageView<'_, u8>, se: &StructuringElement) -> Image<u8> {
    let eroded = erode_binary_u8(src, se);
    dilate_binary_u8(&eroded.as_view(), se)
}

/// Dilation then erosion: closes gaps smaller than `se`.
pub fn close_binary_u8(src: &ImageView<'_, u8>, se: &StructuringElement) -> Image<u8> {
    let dilated = dilate_binary_u8(src, se);
    erode_binary_u8(&dilated.as_view(), se)
}

fn apply(src: &ImageView<'_, u8>, se: &StructuringElement, op: Op) -> Image<u8> {
    let w = src.width();
    let h = src.height();
    let mut out = Image::new_fill(w, h, 0u8);
    if src.is_empty() {
        return out;
    }

    let offsets = se.offsets();
    let dst = out.data_mut();
    for y in 0..h {
        for x in 0..w {
            let mut taps = offsets
                .iter()
                .filter_map(|&(dx, dy)| src.get_signed(x as isize + dx, y as isize + dy));
            let set = match op {
                Op::Erode => taps.all(|&v| v != 0),
                Op::Dilate => taps.any(|&v| v != 0),
            };
            dst[y * w + x] = if set { 255 } else { 0 };
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use il_core::Image;

    use crate::morph::{close_binary_u8, dilate_binary_u8, erode_binary_u8, open_binary_u8};
    use crate::structuring::StructuringElement;

    #[test]
    fn open_removes_single_pixel_speck() {
        let mut data = vec![0u8; 25];
        data[12] = 255;
        let img = Image::from_vec(5, 5, data).expect("valid image");

        let out = open_binary_u8(&img.as_view(), &StructuringElement::rect(3, 3));
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn close_fills_single_pixel_hole() {
        let mut data = vec![255u8; 25];
        data[12] = 0;
        let img = Image::from_vec(5, 5, data).expect("valid image");

        let out = close_binary_u8(&img.as_view(), &StructuringElement::rect(3, 3));
        assert_eq!(out.data()[12], 255);
    }

    #[test]
    fn erosion_ignores_outside_taps() {
        let img = Image::new_fill(6, 4, 255u8);
        let out = erode_binary_u8(&img.as_view(), &StructuringElement::ellipse(7, 7));
        assert!(out.data().iter().all(|&v| v == 255));
    }

    #[test]
    fn open_keeps_large_blob_and_drops_small_one() {
        let (w, h) = (40usize, 20usize);
        let mut data = vec![0u8; w * h];
        for y in 4..16 {
            for x in 4..16 {
                data[y * w + x] = 255;
            }
        }
        for y in 8..10 {
            for x in 28..30 {
                data[y * w + x] = 255;
            }
        }
        let img = Image::from_vec(w, h, data).expect("valid image");

        let out = open_binary_u8(&img.as_view(), &StructuringElement::ellipse(7, 7));
        assert_eq!(out.data()[10 * w + 10], 255);
        assert_eq!(out.data()[8 * w + 28], 0);
    }

    #[test]
    fn dilation_grows_by_kernel_radius() {
        let mut img = Image::new_fill(9, 9, 0u8);
        img.data_mut()[4 * 9 + 4] = 9;
        let out = dilate_binary_u8(&img.as_view(), &StructuringElement::cross(3, 3));

        let set: Vec<usize> = out
            .data()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 255)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(set, vec![3 * 9 + 4, 4 * 9 + 3, 4 * 9 + 4, 4 * 9 + 5, 5 * 9 + 4]);
    }
}
