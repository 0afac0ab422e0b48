use std::time::Instant;

use il_core::{Error, ImageView};
use il_hough::{Circle, CircleFinder, CircleSearch};
use log::debug;

use crate::config::PupilConfig;
use crate::edge_maps::EdgeMaps;

/// Pupil circles in input pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PupilLocation {
    /// Coarse estimate scaled back to full resolution.
    pub approximate: Circle,
    pub refined: Circle,
    pub coarse_votes: u32,
    pub refined_votes: u32,
    /// Multiplier from the coarse grid back to input pixels.
    pub scale: f64,
}

impl PupilLocation {
    /// `false` when no edge supported any circle; both circles are then zero.
    pub fn is_found(&self) -> bool {
        self.coarse_votes > 0
    }
}

impl From<CircleSearch> for PupilLocation {
    fn from(s: CircleSearch) -> Self {
        Self {
            approximate: s.approximate,
            refined: s.refined,
            coarse_votes: s.coarse_votes,
            refined_votes: s.refined_votes,
            scale: s.mult,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PupilLocator {
    cfg: PupilConfig,
    finder: CircleFinder,
}

impl PupilLocator {
    pub fn new(cfg: PupilConfig) -> Self {
        let finder = CircleFinder::new(cfg.hough.clone());
        Self { cfg, finder }
    }

    pub fn config(&self) -> &PupilConfig {
        &self.cfg
    }

    pub fn finder(&self) -> &CircleFinder {
        &self.finder
    }

    pub fn edge_maps(&self, img: &ImageView<'_, u8>) -> Result<EdgeMaps, Error> {
        EdgeMaps::compute(img, &self.cfg)
    }

    pub fn locate(&self, img: &ImageView<'_, u8>) -> Result<PupilLocation, Error> {
        let t0 = Instant::now();
        let maps = self.edge_maps(img)?;
        debug!(
            "edge maps for {}x{} in {:?}",
            img.width(),
            img.height(),
            t0.elapsed()
        );
        self.locate_in_edges(&maps.fused.as_view())
    }

    /// Runs only the circle search on an already fused edge map.
    pub fn locate_in_edges(&self, fused: &ImageView<'_, u8>) -> Result<PupilLocation, Error> {
        let search = self.finder.find(fused)?;
        debug!(
            "pupil approx={} refined={} votes={}/{}",
            search.approximate, search.refined, search.coarse_votes, search.refined_votes
        );
        Ok(search.into())
    }
}

impl Default for PupilLocator {
    fn default() -> Self {
        Self::new(PupilConfig::default())
    }
}

/// Locates the pupil with the default configuration.
pub fn locate_pupil(img: &ImageView<'_, u8>) -> Result<PupilLocation, Error> {
    PupilLocator::default().locate(img)
}
