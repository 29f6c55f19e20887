//! Hysteresis edge detection on the binarized scan

use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::morphology::dilate;

/// Canny edges with fixed low/high thresholds
///
/// Edge pixels are 255, everything else 0.
pub fn detect(binary: &GrayImage, low: f32, high: f32) -> GrayImage {
    canny(binary, low, high)
}

/// Dilate the edge map so single-pixel breaks do not open a boundary
///
/// Non-maximum suppression can leave a one or two pixel gap at the corner
/// of a photo; an open boundary traces as a degenerate, zero-area contour.
/// A radius of 0 returns an unchanged copy.
pub fn close_gaps(edges: &GrayImage, radius: u8) -> GrayImage {
    if radius == 0 {
        return edges.clone();
    }
    dilate(edges, Norm::LInf, radius)
}
