use il_core::ImageView;

use crate::circle::{Circle, CircleMatch};
use crate::table::{Offset, circle_points};

/// Number of `circle`'s offset samples that land on non-zero pixels.
///
/// Samples outside the image count as background.
pub fn count_circle_votes(edge: &ImageView<'_, u8>, circle: Circle) -> u32 {
    if circle.r <= 0 {
        return 0;
    }
    let offsets = circle_points(circle.r as usize);
    count_with_offsets(edge, circle.x, circle.y, &offsets)
}

/// Exhaustive search of the cube `approx ± uncertainty` in `(x, y, r)`.
///
/// Radii below 1 are skipped and candidate centers are clipped to the image.
/// Iterates radius, then row, then column; the first candidate with the
/// highest count wins. Returns a zero match when no candidate scores.
pub fn refine_search(edge: &ImageView<'_, u8>, approx: Circle, uncertainty: i32) -> CircleMatch {
    let mut best = CircleMatch::default();
    if edge.is_empty() {
        return best;
    }

    let u = uncertainty.max(0);
    let x0 = (approx.x - u).max(0);
    let x1 = (approx.x + u).min(edge.width() as i32 - 1);
    let y0 = (approx.y - u).max(0);
    let y1 = (approx.y + u).min(edge.height() as i32 - 1);

    for r in (approx.r - u).max(1)..=(approx.r + u) {
        let offsets = circle_points(r as usize);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let votes = count_with_offsets(edge, x, y, &offsets);
                if votes > best.votes {
                    best = CircleMatch {
                        circle: Circle::new(x, y, r),
                        votes,
                    };
                }
            }
        }
    }

    best
}

fn count_with_offsets(edge: &ImageView<'_, u8>, cx: i32, cy: i32, offsets: &[Offset]) -> u32 {
    offsets
        .iter()
        .filter(|o| {
            edge.get_signed((cx + o.dx) as isize, (cy + o.dy) as isize)
                .is_some_and(|&v| v != 0)
        })
        .count() as u32
}
