use std::f64::consts::PI;
use std::ops::RangeInclusive;
use std::sync::{Arc, OnceLock};

/// Radii (in coarse-image pixels) voted on by the default coarse pass.
pub const DEFAULT_COARSE_RADII: RangeInclusive<usize> = 5..=14;

/// Integer displacement from a circle center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

/// Pixel offsets on a circle of radius `r`.
///
/// Samples the parametric circle at whole degrees `0..360`, truncating each
/// coordinate toward zero, and drops a sample when it repeats the previous
/// one. The comparison starts from `(0, 0)`, so `r == 0` yields nothing.
pub fn circle_points(r: usize) -> Vec<Offset> {
    let rf = r as f64;
    let mut out = Vec::with_capacity(8 * r);
    let mut last = Offset::default();
    for deg in 0..360 {
        let theta = deg as f64 * PI / 180.0;
        let p = Offset {
            dx: (rf * theta.cos()) as i32,
            dy: (rf * theta.sin()) as i32,
        };
        if p != last {
            out.push(p);
            last = p;
        }
    }
    out
}

/// Circle offsets for a contiguous range of radii.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleTable {
    r_min: usize,
    points: Vec<Vec<Offset>>,
}

impl CircleTable {
    pub fn new(radii: RangeInclusive<usize>) -> Self {
        let r_min = *radii.start();
        let points = radii.map(circle_points).collect();
        Self { r_min, points }
    }

    /// Shared table for [`DEFAULT_COARSE_RADII`], built on first use.
    pub fn coarse() -> Arc<CircleTable> {
        static COARSE: OnceLock<Arc<CircleTable>> = OnceLock::new();
        COARSE
            .get_or_init(|| Arc::new(CircleTable::new(DEFAULT_COARSE_RADII)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, r: usize) -> Option<&[Offset]> {
        let idx = r.checked_sub(self.r_min)?;
        self.points.get(idx).map(Vec::as_slice)
    }

    /// `(radius, offsets)` in ascending radius order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Offset])> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, pts)| (self.r_min + i, pts.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{CircleTable, DEFAULT_COARSE_RADII, Offset, circle_points};

    #[test]
    fn no_consecutive_duplicates() {
        for r in 0..=60 {
            let pts = circle_points(r);
            for pair in pts.windows(2) {
                assert_ne!(pair[0], pair[1], "radius {r}");
            }
        }
    }

    #[test]
    fn zero_radius_is_empty_and_first_point_on_axis() {
        assert!(circle_points(0).is_empty());
        let pts = circle_points(9);
        assert_eq!(pts[0], Offset { dx: 9, dy: 0 });
        assert!(pts.contains(&Offset { dx: -9, dy: 0 }));
        assert!(pts.contains(&Offset { dx: 0, dy: 9 }));
        assert!(pts.contains(&Offset { dx: 0, dy: -9 }));
    }

    #[test]
    fn offsets_stay_within_radius() {
        for r in 1..=40 {
            let r2 = (r * r) as i32;
            let lo = ((r - 1) * (r - 1)) as i32;
            for p in circle_points(r) {
                let d2 = p.dx * p.dx + p.dy * p.dy;
                assert!(d2 <= r2, "radius {r}: {p:?}");
                // Truncation pulls each axis in by less than one pixel.
                assert!(d2 >= lo - 2 * r as i32, "radius {r}: {p:?}");
            }
        }
    }

    #[test]
    fn translation_round_trip_is_identity() {
        let pts = circle_points(13);
        let (a, b) = (17, -5);
        let back: Vec<Offset> = pts
            .iter()
            .map(|p| Offset {
                dx: p.dx + a,
                dy: p.dy + b,
            })
            .map(|p| Offset {
                dx: p.dx - a,
                dy: p.dy - b,
            })
            .collect();
        assert_eq!(back, pts);
    }

    #[test]
    fn table_lookup_and_order() {
        let table = CircleTable::new(3..=6);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(2), None);
        assert_eq!(table.get(7), None);
        assert_eq!(table.get(5), Some(circle_points(5).as_slice()));
        let radii: Vec<usize> = table.iter().map(|(r, _)| r).collect();
        assert_eq!(radii, vec![3, 4, 5, 6]);

        #[allow(clippy::reversed_empty_ranges)]
        let empty = CircleTable::new(9..=4);
        assert!(empty.is_empty());
    }

    #[test]
    fn coarse_table_is_shared() {
        let a = CircleTable::coarse();
        let b = CircleTable::coarse();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, CircleTable::new(DEFAULT_COARSE_RADII));
    }
}
