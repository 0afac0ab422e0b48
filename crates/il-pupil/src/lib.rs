//! Pupil localization for grayscale eye images.
//!
//! Pipeline:
//! - Min-max normalize and blur the frame ([`preprocess`]).
//! - Map A: threshold the darkest region, fill enclosed glints, open, then
//!   take gradient magnitude. Map B: gradient magnitude of the blurred frame.
//! - Fuse the two maps with a bitwise AND and run the coarse-to-fine circle
//!   search from `il-hough` on the result.
//!
//! [`PupilLocator`] is cheap to clone and safe to share between threads; the
//! coarse circle table is built once per process.

mod config;
mod edge_maps;
mod locator;
mod preprocess;

pub use config::PupilConfig;
pub use edge_maps::EdgeMaps;
pub use locator::{PupilLocation, PupilLocator, locate_pupil};
pub use preprocess::{Preprocessed, preprocess};
