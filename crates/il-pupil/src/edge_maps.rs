use il_core::{Error, Image, ImageView};
use il_edge::{bitwise_and_u8, sobel_edge_u8, threshold_binary_u8};
use il_morph::{fill_holes_u8, open_binary_u8};

use crate::config::PupilConfig;
use crate::preprocess::{Preprocessed, preprocess};

/// Every intermediate image of the edge stage.
///
/// `edge_a` comes from the cleaned dark-region mask, `edge_b` from the
/// smoothed intensities; `fused` keeps only edges present in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMaps {
    pub normalized: Image<u8>,
    pub blurred: Image<u8>,
    pub threshold: Image<u8>,
    pub filled: Image<u8>,
    pub opened: Image<u8>,
    pub edge_a: Image<u8>,
    pub edge_b: Image<u8>,
    pub fused: Image<u8>,
}

impl EdgeMaps {
    pub fn compute(src: &ImageView<'_, u8>, cfg: &PupilConfig) -> Result<Self, Error> {
        let Preprocessed {
            normalized,
            blurred,
        } = preprocess(src)?;

        let threshold = threshold_binary_u8(&blurred.as_view(), cfg.dark_threshold, 255);
        let filled = fill_holes_u8(&threshold.as_view());
        let opened = open_binary_u8(&filled.as_view(), &cfg.open_kernel);
        let edge_a = sobel_edge_u8(&opened.as_view());
        let edge_b = sobel_edge_u8(&blurred.as_view());
        let fused = bitwise_and_u8(&edge_a.as_view(), &edge_b.as_view())?;

        Ok(Self {
            normalized,
            blurred,
            threshold,
            filled,
            opened,
            edge_a,
            edge_b,
            fused,
        })
    }

    /// Stage name and image, in pipeline order.
    pub fn stages(&self) -> [(&'static str, &Image<u8>); 8] {
        [
            ("normalized", &self.normalized),
            ("blurred", &self.blurred),
            ("threshold", &self.threshold),
            ("filled", &self.filled),
            ("opened", &self.opened),
            ("edge_a", &self.edge_a),
            ("edge_b", &self.edge_b),
            ("fused", &self.fused),
        ]
    }
}
