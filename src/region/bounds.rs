//! Axis-aligned pixel rectangles
//!
//! Coordinates follow the image convention where (0,0) is the top-left
//! corner. Rectangles are inclusive of their boundary pixels, so a single
//! point has a 1x1 rectangle.

use imageproc::point::Point;

/// Rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner
    pub x: u32,
    /// Y-coordinate of the top-left corner
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Minimal rectangle containing every point
    ///
    /// Negative coordinates are clamped to zero. Returns `None` for an
    /// empty point list.
    pub fn bounding(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let x = min_x.max(0);
        let y = min_y.max(0);
        let width = (max_x.max(0) - x + 1) as u32;
        let height = (max_y.max(0) - y + 1) as u32;

        Some(Region::new(x as u32, y as u32, width, height))
    }

    /// X-coordinate just right of the region (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Y-coordinate just below the region (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Whether `other` lies completely inside this region
    pub fn encloses(&self, other: &Region) -> bool {
        other.x >= self.x && other.y >= self.y &&
            other.end_x() <= self.end_x() && other.end_y() <= self.end_y()
    }

    /// Clip to an image of the given size
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Region {
        let x = self.x.min(image_width);
        let y = self.y.min(image_height);
        Region::new(
            x,
            y,
            self.end_x().min(image_width) - x,
            self.end_y().min(image_height) - y,
        )
    }
}

#[cfg(test)]
impl Region {
    pub(crate) fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub(crate) fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x as i64 && x < self.end_x() as i64 &&
            y >= self.y as i64 && y < self.end_y() as i64
    }
}
