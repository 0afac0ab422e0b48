#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeShape {
    Rect,
    Ellipse,
    Cross,
}

/// Odd-sized binary kernel anchored at its center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    shape: SeShape,
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

impl StructuringElement {
    pub fn new(shape: SeShape, width: usize, height: usize) -> Self {
        assert!(
            width % 2 == 1 && height % 2 == 1,
            "structuring element dimensions must be odd, got {width}x{height}"
        );

        let mut mask = vec![false; width * height];
        let c = width / 2;
        let r = height / 2;

        // A single row or column cannot be elliptical.
        let shape_eff = if shape == SeShape::Ellipse && (width == 1 || height == 1) {
            SeShape::Rect
        } else {
            shape
        };

        for i in 0..height {
            let (j0, j1) = match shape_eff {
                SeShape::Rect => (0, width - 1),
                SeShape::Cross if i == r => (0, width - 1),
                SeShape::Cross => (c, c),
                SeShape::Ellipse => {
                    let dy = i.abs_diff(r) as f64;
                    let rr = (r * r) as f64;
                    let dx = (c as f64 * ((rr - dy * dy) / rr).sqrt()).round_ties_even() as usize;
                    (c.saturating_sub(dx), (c + dx).min(width - 1))
                }
            };
            for j in j0..=j1 {
                mask[i * width + j] = true;
            }
        }

        Self {
            shape,
            width,
            height,
            mask,
        }
    }

    pub fn rect(width: usize, height: usize) -> Self {
        Self::new(SeShape::Rect, width, height)
    }

    pub fn ellipse(width: usize, height: usize) -> Self {
        Self::new(SeShape::Ellipse, width, height)
    }

    pub fn cross(width: usize, height: usize) -> Self {
        Self::new(SeShape::Cross, width, height)
    }

    pub fn shape(&self) -> SeShape {
        self.shape
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.mask[y * self.width + x]
    }

    /// Active taps as `(dx, dy)` relative to the anchor, row-major.
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let ax = (self.width / 2) as isize;
        let ay = (self.height / 2) as isize;
        let mut out = Vec::with_capacity(self.mask.len());
        for y in 0..self.height {
            for x in 0..self.width {
                if self.mask[y * self.width + x] {
                    out.push((x as isize - ax, y as isize - ay));
                }
            }
        }
        out
    }
}

impl Default for StructuringElement {
    fn default() -> Self {
        Self::ellipse(7, 7)
    }
}
