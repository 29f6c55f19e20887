//! Tests for region geometry, deduplication and selection

mod candidate_tests;

use imageproc::point::Point;
use super::Contour;

/// Clockwise rectangle through its four corners
pub(crate) fn rect_contour(x0: i32, y0: i32, x1: i32, y1: i32) -> Contour {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

/// Rectangle of the given size centred on (cx, cy)
pub(crate) fn centred_rect(cx: i32, cy: i32, width: i32, height: i32) -> Contour {
    rect_contour(cx - width / 2, cy - height / 2, cx + width / 2, cy + height / 2)
}
