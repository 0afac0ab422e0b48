use il_hough::HoughConfig;
use il_morph::StructuringElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PupilConfig {
    /// Normalized intensities at or below this value are pupil candidates.
    pub dark_threshold: u8,
    /// Opening kernel applied to the hole-filled threshold map.
    pub open_kernel: StructuringElement,
    pub hough: HoughConfig,
}

impl Default for PupilConfig {
    fn default() -> Self {
        Self {
            dark_threshold: 25,
            open_kernel: StructuringElement::ellipse(7, 7),
            hough: HoughConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use il_morph::SeShape;

    use crate::config::PupilConfig;

    #[test]
    fn defaults() {
        let cfg = PupilConfig::default();
        assert_eq!(cfg.dark_threshold, 25);
        assert_eq!(cfg.open_kernel.shape(), SeShape::Ellipse);
        assert_eq!((cfg.open_kernel.width(), cfg.open_kernel.height()), (7, 7));
        assert_eq!(cfg.hough.radii, 5..=14);
        assert_eq!(cfg.hough.max_coarse_dim, 60);
    }
}
