//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use scansplit::utils::logger::Logger;
use scansplit::{Region, SplitRequest};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Dark scanner lid with white photos on it
pub fn draw_scan(width: u32, height: u32, photos: &[Rect]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    for photo in photos {
        draw_filled_rect_mut(&mut canvas, *photo, WHITE);
    }
    canvas
}

pub fn save_scan(dir: &Path, name: &str, scan: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    scan.save(&path).unwrap();
    path
}

pub fn region_of(rect: &Rect) -> Region {
    Region::new(rect.left() as u32, rect.top() as u32, rect.width(), rect.height())
}

pub fn record_logger(dir: &Path) -> Logger {
    Logger::new(dir.join("record.log")).unwrap()
}

pub fn request(input: &Path, output_dir: &Path, batch_id: &str, timestamp: &str) -> SplitRequest {
    SplitRequest {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        batch_id: batch_id.to_string(),
        run_timestamp: timestamp.to_string(),
    }
}

/// Three separated 400 x 250 (100 000 px²) photos
pub fn three_photos() -> Vec<Rect> {
    vec![
        Rect::at(100, 100).of_size(400, 250),
        Rect::at(700, 100).of_size(400, 250),
        Rect::at(100, 700).of_size(400, 250),
    ]
}

pub fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}
