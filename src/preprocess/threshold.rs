//! Adaptive mean thresholding
//!
//! Each pixel is compared against the mean of its square neighbourhood
//! minus a constant, which keeps segmentation stable under the uneven
//! illumination a flatbed scanner produces across the glass.

use image::{GrayImage, Luma};

/// Summed-area table with one row and column of zero padding
///
/// `table[(y + 1) * (width + 1) + (x + 1)]` is the sum of all pixels in
/// the rectangle `(0, 0)..=(x, y)`.
pub(crate) fn integral_image(image: &GrayImage) -> Vec<u64> {
    let (width, height) = image.dimensions();
    let stride = width as usize + 1;
    let mut table = vec![0u64; stride * (height as usize + 1)];

    for y in 0..height as usize {
        let mut row_sum = 0u64;
        for x in 0..width as usize {
            row_sum += image.get_pixel(x as u32, y as u32)[0] as u64;
            table[(y + 1) * stride + (x + 1)] = table[y * stride + (x + 1)] + row_sum;
        }
    }

    table
}

/// Mean of the window centred on `(x, y)`, clipped to the image
fn window_mean(table: &[u64], width: u32, height: u32, x: u32, y: u32, radius: u32) -> f64 {
    let stride = width as usize + 1;
    let x0 = x.saturating_sub(radius) as usize;
    let y0 = y.saturating_sub(radius) as usize;
    let x1 = (x + radius).min(width - 1) as usize + 1;
    let y1 = (y + radius).min(height - 1) as usize + 1;

    let sum = table[y1 * stride + x1] + table[y0 * stride + x0]
        - table[y0 * stride + x1]
        - table[y1 * stride + x0];
    let count = ((x1 - x0) * (y1 - y0)) as f64;

    sum as f64 / count
}

/// Binarize against the local mean
///
/// A pixel becomes 255 when its value is strictly greater than the mean
/// of the `block_size` x `block_size` window around it minus `offset`,
/// and 0 otherwise.
pub fn adaptive_mean(image: &GrayImage, block_size: u32, offset: i32) -> GrayImage {
    let (width, height) = image.dimensions();
    let radius = block_size / 2;
    let table = integral_image(image);
    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mean = window_mean(&table, width, height, x, y, radius);
            let value = image.get_pixel(x, y)[0] as f64;
            let binary = if value > mean - offset as f64 { 255u8 } else { 0u8 };
            output.put_pixel(x, y, Luma([binary]));
        }
    }

    output
}
