//! Collapsing repeated detections of the same photo

use log::debug;
use super::candidate::RegionCandidate;

/// Order candidates largest first
///
/// The sort is stable, so equal areas keep tracer discovery order.
pub fn sort_by_area_desc(candidates: &mut [RegionCandidate]) {
    candidates.sort_by(|a, b| b.area().total_cmp(&a.area()));
}

/// Whether two candidates are close enough to be the same photo
///
/// Centroids exactly `min_distance` apart are distinct photos.
pub fn is_duplicate(a: &RegionCandidate, b: &RegionCandidate, min_distance: f64) -> bool {
    a.centroid().distance_to(&b.centroid()) < min_distance
}

/// Greedy centroid deduplication over an area-sorted list
///
/// Walks the list in order and keeps a candidate only when it is not a
/// duplicate of any candidate already kept, so the first (largest) member
/// of each cluster wins.
///
/// # Returns
/// The kept candidates in input order, and the number dropped
pub fn deduplicate(sorted: Vec<RegionCandidate>, min_distance: f64) -> (Vec<RegionCandidate>, usize) {
    let total = sorted.len();
    let mut kept: Vec<RegionCandidate> = Vec::with_capacity(total);

    for candidate in sorted {
        match kept.iter().find(|existing| is_duplicate(existing, &candidate, min_distance)) {
            Some(existing) => {
                debug!("Dropping contour #{} (area {:.0}): centroid within {} of contour #{}",
                       candidate.discovery_index(), candidate.area(), min_distance,
                       existing.discovery_index());
            }
            None => kept.push(candidate),
        }
    }

    let dropped = total - kept.len();
    (kept, dropped)
}
