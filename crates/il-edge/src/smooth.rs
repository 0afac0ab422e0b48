use il_core::{BorderMode, Image, ImageView};

use crate::conv::correlate_separable_u8;
use crate::kernels::{BINOMIAL5, BINOMIAL5_NORM_SHIFT};

/// 5x5 Gaussian blur with the binomial kernel `[1 4 6 4 1] / 16` per axis.
pub fn gaussian5x5_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let acc = correlate_separable_u8(src, &BINOMIAL5, &BINOMIAL5, BorderMode::Reflect101);
    let half = 1i32 << (BINOMIAL5_NORM_SHIFT - 1);
    let data = acc
        .data()
        .iter()
        .map(|&v| ((v + half) >> BINOMIAL5_NORM_SHIFT).clamp(0, 255) as u8)
        .collect();
    Image::from_vec(acc.width(), acc.height(), data).expect("blur keeps input dimensions")
}
