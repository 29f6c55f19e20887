//! Region centroids

/// Geometric centre of a region's enclosed area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    pub fn new(x: f64, y: f64) -> Self {
        Centroid { x, y }
    }

    /// Euclidean distance to another centroid
    pub fn distance_to(&self, other: &Centroid) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
