use il_core::{Image, ImageView};

use crate::circle::{Circle, CircleMatch};
use crate::table::{CircleTable, Offset};

/// Accumulates center votes for one radius.
///
/// Every non-zero pixel at `(col, row)` votes for `(col + dx, row + dy)` for
/// each offset; centers outside the image are skipped.
pub fn vote_grid(edge: &ImageView<'_, u8>, offsets: &[Offset]) -> Image<u16> {
    let w = edge.width();
    let h = edge.height();
    let mut votes = Image::new_fill(w, h, 0u16);
    let acc = votes.data_mut();

    for row in 0..h {
        for (col, &px) in edge.row(row).iter().enumerate() {
            if px == 0 {
                continue;
            }
            for o in offsets {
                let a = row as i64 + o.dy as i64;
                let b = col as i64 + o.dx as i64;
                if a < 0 || b < 0 || a >= h as i64 || b >= w as i64 {
                    continue;
                }
                let idx = a as usize * w + b as usize;
                acc[idx] = acc[idx].saturating_add(1);
            }
        }
    }

    votes
}

/// First maximum in row-major order as `(x, y, votes)`.
pub fn grid_peak(grid: &Image<u16>) -> (usize, usize, u16) {
    let w = grid.width().max(1);
    let mut best = (0usize, 0u16);
    for (i, &v) in grid.data().iter().enumerate() {
        if v > best.1 {
            best = (i, v);
        }
    }
    (best.0 % w, best.0 / w, best.1)
}

/// Coarse pass: best-supported circle over every radius in `table`.
///
/// Radii are scanned in ascending order and a radius only takes over when
/// its peak is strictly higher, so ties keep the smaller radius and, within
/// a radius, the first peak in row-major order.
pub fn coarse_search(edge: &ImageView<'_, u8>, table: &CircleTable) -> CircleMatch {
    let peaks = radius_peaks(edge, table);

    let mut winner = CircleMatch::default();
    for (r, (x, y, votes)) in peaks {
        if u32::from(votes) > winner.votes {
            winner = CircleMatch {
                circle: Circle::new(x as i32, y as i32, r as i32),
                votes: u32::from(votes),
            };
        }
    }
    winner
}

#[cfg(not(feature = "parallel"))]
fn radius_peaks(
    edge: &ImageView<'_, u8>,
    table: &CircleTable,
) -> Vec<(usize, (usize, usize, u16))> {
    table
        .iter()
        .map(|(r, offsets)| (r, grid_peak(&vote_grid(edge, offsets))))
        .collect()
}

#[cfg(feature = "parallel")]
fn radius_peaks(
    edge: &ImageView<'_, u8>,
    table: &CircleTable,
) -> Vec<(usize, (usize, usize, u16))> {
    use rayon::prelude::*;

    let radii: Vec<(usize, &[Offset])> = table.iter().collect();
    radii
        .par_iter()
        .map(|&(r, offsets)| (r, grid_peak(&vote_grid(edge, offsets))))
        .collect()
}


#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use il_core::Image;

    use crate::coarse::{grid_peak, radius_peaks, vote_grid};
    use crate::table::{CircleTable, circle_points};

    #[test]
    fn parallel_peaks_match_sequential_fold() {
        let (w, h) = (72usize, 60usize);
        let mut img = Image::new_fill(w, h, 0u8);
        for &(cx, cy, r) in &[(20i32, 18i32, 6usize), (50, 35, 11), (30, 44, 9)] {
            for p in circle_points(r) {
                let (x, y) = (cx + p.dx, cy + p.dy);
                if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                    img.data_mut()[y as usize * w + x as usize] = 255;
                }
            }
        }
        let table = CircleTable::coarse();
        let view = img.as_view();

        let sequential: Vec<_> = table
            .iter()
            .map(|(r, offsets)| (r, grid_peak(&vote_grid(&view, offsets))))
            .collect();
        assert_eq!(radius_peaks(&view, &table), sequential);
    }
}
