//! Coarse-to-fine circular Hough search over binary edge images.
//!
//! Core strategy:
//! - Downscale the edge image so its smaller side is at most
//!   [`HoughConfig::max_coarse_dim`] and vote for centers over a fixed radius
//!   range using precomputed circle offsets ([`CircleTable`]).
//! - Scale the coarse winner back up and search a small `(x, y, r)` cube
//!   exhaustively at full resolution.
//!
//! Any non-zero pixel counts as an edge. Coordinates are `x` = column,
//! `y` = row throughout.
//!
//! A search that finds no votes is not an error: it yields a `(0,0,0)` circle
//! with zero votes. Callers that need a "not found" outcome should gate on
//! [`CircleSearch::coarse_votes`] or [`CircleSearch::refined_votes`].
//!
//! With the `parallel` feature the coarse pass builds vote grids for all
//! radii concurrently; results are identical to the sequential pass.

mod circle;
mod coarse;
mod finder;
mod fine;
mod table;

pub use circle::{Circle, CircleMatch};
pub use coarse::{coarse_search, grid_peak, vote_grid};
pub use finder::{CircleFinder, CircleSearch, HoughConfig};
pub use fine::{count_circle_votes, refine_search};
pub use table::{CircleTable, DEFAULT_COARSE_RADII, Offset, circle_points};
