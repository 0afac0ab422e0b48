use il_core::{Image, ImageView};

use crate::resize::resize_bilinear_u8;

/// Downscaled copy of an image and the factor back to source coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Shrunk {
    pub image: Image<u8>,
    pub mult: f64,
}

impl Shrunk {
    pub fn is_rescaled(&self) -> bool {
        self.mult != 1.0
    }
}

/// Shrinks `src` so that `min(width, height) <= max_dim`.
///
/// Images already within the cap are copied unchanged with `mult == 1.0`.
/// A `max_dim` of zero disables shrinking.
pub fn shrink_to_max_u8(src: &ImageView<'_, u8>, max_dim: usize) -> Shrunk {
    let small_side = src.width().min(src.height());
    if max_dim == 0 || small_side <= max_dim {
        return Shrunk {
            image: src.to_image(),
            mult: 1.0,
        };
    }

    let scale = max_dim as f64 / small_side as f64;
    let dst_w = ((src.width() as f64 * scale).round() as usize).max(1);
    let dst_h = ((src.height() as f64 * scale).round() as usize).max(1);

    Shrunk {
        image: resize_bilinear_u8(src, dst_w, dst_h, scale as f32, scale as f32),
        mult: small_side as f64 / max_dim as f64,
    }
}

#[cfg(test)]
mod tests {
    use il_core::Image;

    use crate::shrink::shrink_to_max_u8;

    #[test]
    fn small_images_pass_through() {
        let img = Image::new_fill(50, 40, 3u8);
        let out = shrink_to_max_u8(&img.as_view(), 60);
        assert_eq!(out.mult, 1.0);
        assert!(!out.is_rescaled());
        assert_eq!(out.image, img);
    }

    #[test]
    fn smaller_side_is_capped() {
        let img = Image::new_fill(300, 200, 0u8);
        let out = shrink_to_max_u8(&img.as_view(), 60);
        assert_eq!(out.image.dims(), (90, 60));
        assert!((out.mult - 200.0 / 60.0).abs() < 1e-12);
        assert!(out.is_rescaled());
    }

    #[test]
    fn sparse_foreground_survives_downscale() {
        let (w, h) = (200usize, 200usize);
        let mut data = vec![0u8; w * h];
        for x in 0..w {
            data[100 * w + x] = 255;
            data[101 * w + x] = 255;
        }
        let img = Image::from_vec(w, h, data).expect("valid image");
        let out = shrink_to_max_u8(&img.as_view(), 60);

        let lit_rows: Vec<usize> = (0..out.image.height())
            .filter(|&y| out.image.as_view().row(y).iter().all(|&v| v > 0))
            .collect();
        assert!(!lit_rows.is_empty());
        assert!(lit_rows.iter().all(|&y| (29..=31).contains(&y)));
    }
}
