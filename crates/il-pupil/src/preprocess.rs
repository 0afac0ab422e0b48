use il_core::{Error, Image, ImageView};
use il_edge::{gaussian5x5_u8, normalize_minmax_u8};

/// Contrast-stretched and smoothed copies of an input frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    pub normalized: Image<u8>,
    pub blurred: Image<u8>,
}

/// Min-max normalizes `src` to `[0, 255]` then applies the 5x5 binomial blur.
pub fn preprocess(src: &ImageView<'_, u8>) -> Result<Preprocessed, Error> {
    if src.is_empty() {
        return Err(Error::EmptyImage);
    }
    let normalized = normalize_minmax_u8(src);
    let blurred = gaussian5x5_u8(&normalized.as_view());
    Ok(Preprocessed {
        normalized,
        blurred,
    })
}

#[cfg(test)]
mod tests {
    use il_core::{Error, Image};

    use crate::preprocess::preprocess;

    #[test]
    fn rejects_empty_input() {
        let img = Image::<u8>::from_vec(0, 3, Vec::new()).expect("empty image");
        assert_eq!(preprocess(&img.as_view()).unwrap_err(), Error::EmptyImage);
    }

    #[test]
    fn stretches_contrast_before_blurring() {
        let mut data = vec![100u8; 16 * 16];
        for y in 0..16 {
            for x in 8..16 {
                data[y * 16 + x] = 140;
            }
        }
        let img = Image::from_vec(16, 16, data).expect("valid image");
        let out = preprocess(&img.as_view()).expect("preprocess succeeds");

        assert_eq!(out.normalized.data()[0], 0);
        assert_eq!(out.normalized.data()[15], 255);
        assert_eq!(out.blurred.data()[0], 0);
        assert_eq!(out.blurred.data()[15], 255);
        let mid = out.blurred.data()[8 * 16 + 8];
        assert!(mid > 0 && mid < 255);
    }

    #[test]
    fn repeated_runs_compare_equal() {
        let img = Image::from_vec(4, 3, (0u8..12).map(|v| v * 20).collect()).expect("valid image");
        let a = preprocess(&img.as_view()).expect("preprocess succeeds");
        let b = preprocess(&img.as_view()).expect("preprocess succeeds");
        assert_eq!(a, b);
    }

    #[test]
    fn constant_input_maps_to_zero() {
        let img = Image::new_fill(9, 7, 42u8);
        let out = preprocess(&img.as_view()).expect("preprocess succeeds");
        assert!(out.normalized.data().iter().all(|&v| v == 0));
        assert!(out.blurred.data().iter().all(|&v| v == 0));
    }
}
