use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Instant;

use il_core::{Error, ImageView};
use il_resize::shrink_to_max_u8;
use log::debug;

use crate::circle::Circle;
use crate::coarse::coarse_search;
use crate::fine::{count_circle_votes, refine_search};
use crate::table::{CircleTable, DEFAULT_COARSE_RADII};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoughConfig {
    /// Radii voted on in the downscaled image.
    pub radii: RangeInclusive<usize>,
    /// Cap on the smaller side of the downscaled image. Must be non-zero.
    pub max_coarse_dim: usize,
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            radii: DEFAULT_COARSE_RADII,
            max_coarse_dim: 60,
        }
    }
}

/// Result of a coarse-to-fine search, in full-resolution coordinates unless
/// noted otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSearch {
    /// Coarse winner in downscaled coordinates.
    pub coarse: Circle,
    pub coarse_votes: u32,
    /// Coarse winner scaled back by `mult`.
    pub approximate: Circle,
    pub refined: Circle,
    pub refined_votes: u32,
    pub mult: f64,
}

impl CircleSearch {
    fn empty(mult: f64) -> Self {
        Self {
            coarse: Circle::default(),
            coarse_votes: 0,
            approximate: Circle::default(),
            refined: Circle::default(),
            refined_votes: 0,
            mult,
        }
    }

    pub fn is_found(&self) -> bool {
        self.coarse_votes > 0
    }
}

#[derive(Debug, Clone)]
pub struct CircleFinder {
    cfg: HoughConfig,
    table: Arc<CircleTable>,
}

impl CircleFinder {
    pub fn new(cfg: HoughConfig) -> Self {
        assert!(cfg.max_coarse_dim > 0, "max_coarse_dim must be > 0");
        let table = if cfg.radii == DEFAULT_COARSE_RADII {
            CircleTable::coarse()
        } else {
            Arc::new(CircleTable::new(cfg.radii.clone()))
        };
        Self { cfg, table }
    }

    pub fn config(&self) -> &HoughConfig {
        &self.cfg
    }

    pub fn table(&self) -> &Arc<CircleTable> {
        &self.table
    }

    /// Locates the best-supported circle in a binary edge image.
    pub fn find(&self, edge: &ImageView<'_, u8>) -> Result<CircleSearch, Error> {
        if edge.is_empty() {
            return Err(Error::EmptyImage);
        }

        let t0 = Instant::now();
        let shrunk = shrink_to_max_u8(edge, self.cfg.max_coarse_dim);
        let mult = shrunk.mult;
        let best = coarse_search(&shrunk.image.as_view(), &self.table);
        debug!(
            "coarse pass: {}x{} mult={:.4} winner={} votes={} in {:?}",
            shrunk.image.width(),
            shrunk.image.height(),
            mult,
            best.circle,
            best.votes,
            t0.elapsed()
        );

        if best.votes == 0 {
            return Ok(CircleSearch::empty(mult));
        }

        if !shrunk.is_rescaled() {
            return Ok(CircleSearch {
                coarse: best.circle,
                coarse_votes: best.votes,
                approximate: best.circle,
                refined: best.circle,
                refined_votes: count_circle_votes(edge, best.circle),
                mult,
            });
        }

        let t1 = Instant::now();
        let approximate = best.circle.scaled(mult);
        let uncertainty = (mult / 2.0).ceil() as i32;
        let refined = refine_search(edge, approximate, uncertainty);
        debug!(
            "fine pass: approx={} refined={} votes={} u={} in {:?}",
            approximate,
            refined.circle,
            refined.votes,
            uncertainty,
            t1.elapsed()
        );

        Ok(CircleSearch {
            coarse: best.circle,
            coarse_votes: best.votes,
            approximate,
            refined: refined.circle,
            refined_votes: refined.votes,
            mult,
        })
    }
}

impl Default for CircleFinder {
    fn default() -> Self {
        Self::new(HoughConfig::default())
    }
}
