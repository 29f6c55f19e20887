//! Ranked, deduplicated photo regions from an edge map

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use log::{info, warn};

use crate::config::RegionConfig;
use super::candidate::RegionCandidate;
use super::dedup;
use super::Contour;

/// Outcome of region extraction for one scan
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Retained regions, rank order (index = output rank)
    pub regions: Vec<RegionCandidate>,
    /// External contours found by the tracer
    pub traced: usize,
    /// Contours discarded by the area filter
    pub below_min_area: usize,
    /// Candidates collapsed into a larger neighbour
    pub duplicates: usize,
    /// Candidates cut by the expected count
    pub truncated: usize,
}

/// Outer boundaries of every foreground component
///
/// Holes and anything nested inside another component are skipped: only
/// the outer silhouette of each photo matters, not the content printed on
/// it. Contours are returned in tracer (raster scan) order.
pub fn trace_external(edges: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| c.points)
        .collect()
}

/// Turns edge maps or traced contours into an ordered photo list
pub struct RegionExtractor<'a> {
    config: &'a RegionConfig,
}

impl<'a> RegionExtractor<'a> {
    pub fn new(config: &'a RegionConfig) -> Self {
        RegionExtractor { config }
    }

    /// Trace the edge map and select photo regions
    pub fn extract(&self, edges: &GrayImage) -> Extraction {
        info!("Finding contours");
        let contours = trace_external(edges);
        self.select(contours)
    }

    /// Filter, rank, deduplicate and truncate traced contours
    ///
    /// # Arguments
    /// * `contours` - External contours in discovery order
    ///
    /// # Returns
    /// At most `expected_count` regions, largest first
    pub fn select(&self, contours: Vec<Contour>) -> Extraction {
        let traced = contours.len();
        let min_area = self.config.min_area;

        let mut candidates: Vec<RegionCandidate> = contours
            .into_iter()
            .enumerate()
            .filter_map(|(index, contour)| RegionCandidate::accept(index, contour, min_area))
            .collect();
        let below_min_area = traced - candidates.len();
        info!("Filtered out {} contours with area less than {}, leaving {} remaining",
              below_min_area, min_area, candidates.len());

        info!("Sorting contours by area in descending order");
        dedup::sort_by_area_desc(&mut candidates);

        info!("Deduplicating contours within {} px of each other", self.config.dedup_distance);
        let (mut regions, duplicates) = dedup::deduplicate(candidates, self.config.dedup_distance);
        info!("Removed {} duplicate contours, {} distinct regions", duplicates, regions.len());

        let expected = self.config.expected_count;
        let mut truncated = 0;
        if regions.len() > expected {
            for dropped in &regions[expected..] {
                info!("Dropping region beyond expected count: contour #{} (area {:.0}) at {:?}",
                      dropped.discovery_index(), dropped.area(), dropped.bounds());
            }
            truncated = regions.len() - expected;
            regions.truncate(expected);
        } else if regions.len() < expected {
            warn!("Expected {} photos but found {}", expected, regions.len());
        }

        Extraction {
            regions,
            traced,
            below_min_area,
            duplicates,
            truncated,
        }
    }
}
