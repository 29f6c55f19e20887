//! Tests for moments, the area filter and bounding rectangles

extern crate std;

use imageproc::point::Point;
use crate::region::{polygon_moments, Region, RegionCandidate};
use super::rect_contour;

#[test]
fn test_square_moments() {
    let contour = rect_contour(0, 0, 100, 100);
    let moments = polygon_moments(&contour);
    std::assert_eq!(moments.m00.abs(), 10_000.0);

    let candidate = RegionCandidate::accept(0, contour, 1.0).unwrap();
    std::assert_eq!(candidate.area(), 10_000.0);
    std::assert!((candidate.centroid().x - 50.0).abs() < 1e-9);
    std::assert!((candidate.centroid().y - 50.0).abs() < 1e-9);
}

#[test]
fn test_winding_does_not_matter() {
    let mut contour = rect_contour(10, 20, 70, 50);
    let forward = RegionCandidate::accept(0, contour.clone(), 1.0).unwrap();
    contour.reverse();
    let backward = RegionCandidate::accept(0, contour, 1.0).unwrap();

    std::assert_eq!(forward.area(), backward.area());
    std::assert_eq!(forward.centroid(), backward.centroid());
}

#[test]
fn test_area_at_threshold_is_accepted() {
    let contour = rect_contour(0, 0, 100, 100);
    std::assert!(RegionCandidate::accept(0, contour, 10_000.0).is_some());
}

#[test]
fn test_area_below_threshold_is_rejected() {
    // 100 x 99 encloses one row of pixels less than the 10 000 threshold
    let contour = rect_contour(0, 0, 100, 99);
    std::assert!(RegionCandidate::accept(0, contour.clone(), 10_000.0).is_none());
    std::assert!(RegionCandidate::accept(0, contour, 9_900.0).is_some());
}

#[test]
fn test_degenerate_contour_never_becomes_candidate() {
    let line = vec![Point::new(0, 0), Point::new(50, 0), Point::new(100, 0)];
    std::assert!(RegionCandidate::accept(0, line, f64::MIN_POSITIVE).is_none());
    std::assert!(RegionCandidate::accept(0, Vec::new(), f64::MIN_POSITIVE).is_none());
}

#[test]
fn test_bounds_contain_every_point() {
    let contour = vec![
        Point::new(15, 40),
        Point::new(60, 12),
        Point::new(110, 45),
        Point::new(58, 90),
    ];
    let candidate = RegionCandidate::accept(3, contour.clone(), 1.0).unwrap();
    let bounds = candidate.bounds();

    std::assert_eq!(bounds, Region::new(15, 12, 96, 79));
    std::assert_eq!(candidate.discovery_index(), 3);
    for p in &contour {
        std::assert!(bounds.contains(p.x as i64, p.y as i64));
    }
}

#[test]
fn test_region_helpers() {
    std::assert!(Region::bounding(&[]).is_none());
    std::assert_eq!(Region::bounding(&[Point::new(4, 9)]), Some(Region::new(4, 9, 1, 1)));

    let region = Region::new(10, 10, 50, 40);
    std::assert_eq!(region.end_x(), 60);
    std::assert_eq!(region.end_y(), 50);
    std::assert_eq!(region.area(), 2000);
    std::assert!(region.encloses(&Region::new(20, 20, 10, 10)));
    std::assert!(!region.encloses(&Region::new(55, 20, 10, 10)));
    std::assert_eq!(region.clamp_to(30, 100), Region::new(10, 10, 20, 40));
}
