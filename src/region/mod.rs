//! Locating photo regions in an edge map
//!
//! Contours are traced, filtered by enclosed area, ranked largest first,
//! collapsed by centroid proximity and cut to the expected photo count.

mod bounds;
mod centroid;
mod candidate;
pub mod dedup;
mod extractor;
#[cfg(test)]
mod tests;

pub use bounds::Region;
pub use centroid::Centroid;
pub use candidate::{polygon_moments, Moments, RegionCandidate};
pub use extractor::{trace_external, Extraction, RegionExtractor};

/// A traced boundary, in tracer order
pub type Contour = Vec<imageproc::point::Point<i32>>;
