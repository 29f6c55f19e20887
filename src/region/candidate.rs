//! Region candidates and their polygon moments

use super::bounds::Region;
use super::centroid::Centroid;
use super::Contour;

/// Raw spatial moments of a closed polygon
///
/// `m00` is the signed enclosed area; its sign follows the winding of the
/// contour and cancels out of the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

/// Area moments of the polygon through the contour points (Green's theorem)
pub fn polygon_moments(points: &Contour) -> Moments {
    let n = points.len();
    let (mut a, mut cx, mut cy) = (0.0f64, 0.0f64, 0.0f64);

    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let (xi, yi, xj, yj) = (p.x as f64, p.y as f64, q.x as f64, q.y as f64);
        let cross = xi * yj - xj * yi;
        a += cross;
        cx += (xi + xj) * cross;
        cy += (yi + yj) * cross;
    }

    Moments {
        m00: a / 2.0,
        m10: cx / 6.0,
        m01: cy / 6.0,
    }
}

/// A traced contour large enough to be a photo
///
/// Candidates only come out of [`RegionCandidate::accept`], which applies
/// the area filter before the centroid is computed; a candidate's area is
/// therefore always strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCandidate {
    contour: Contour,
    discovery_index: usize,
    area: f64,
    centroid: Centroid,
    bounds: Region,
}

impl RegionCandidate {
    /// Apply the area filter to one traced contour
    ///
    /// # Arguments
    /// * `discovery_index` - Position of the contour in tracer output
    /// * `contour` - Boundary points
    /// * `min_area` - Smallest accepted enclosed area, inclusive
    ///
    /// # Returns
    /// The candidate, or `None` when the enclosed area is below `min_area`
    /// or not positive
    pub fn accept(discovery_index: usize, contour: Contour, min_area: f64) -> Option<Self> {
        let moments = polygon_moments(&contour);
        let area = moments.m00.abs();
        if !(area >= min_area) || area <= 0.0 {
            return None;
        }

        let centroid = Centroid::new(moments.m10 / moments.m00, moments.m01 / moments.m00);
        let bounds = Region::bounding(&contour)?;

        Some(RegionCandidate {
            contour,
            discovery_index,
            area,
            centroid,
            bounds,
        })
    }

    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Order in which the tracer found this contour
    pub fn discovery_index(&self) -> usize {
        self.discovery_index
    }

    /// Enclosed area in px²
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn centroid(&self) -> Centroid {
        self.centroid
    }

    /// Minimal axis-aligned rectangle around the contour
    pub fn bounds(&self) -> Region {
        self.bounds
    }
}
