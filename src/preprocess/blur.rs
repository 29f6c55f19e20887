//! Gaussian smoothing with a fixed kernel size

use image::GrayImage;
use imageproc::filter::separable_filter_equal;

/// Normalised 1D Gaussian kernel of `size` taps
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let center = (size as f32 - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= sum;
    }
    kernel
}

/// Blur with a `size` x `size` Gaussian, applied separably
pub fn gaussian(image: &GrayImage, size: u32, sigma: f32) -> GrayImage {
    let kernel = gaussian_kernel(size, sigma);
    separable_filter_equal(image, kernel.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_kernel_is_normalised_and_symmetric() {
        let kernel = gaussian_kernel(3, 0.8);
        assert_eq!(kernel.len(), 3);
        assert!((kernel.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!((kernel[0] - kernel[2]).abs() < 1e-6);
        assert!(kernel[1] > kernel[0]);
        // 1 / (1 + 2 * exp(-1 / 1.28))
        assert!((kernel[1] - 0.5220).abs() < 1e-3);
    }

    #[test]
    fn test_blur_preserves_flat_regions() {
        let image = GrayImage::from_pixel(9, 9, Luma([77]));
        let blurred = gaussian(&image, 3, 0.8);
        assert_eq!(blurred.dimensions(), (9, 9));
        // Two rounding passes may lose one level
        assert!(blurred.pixels().all(|p| (p[0] as i32 - 77).abs() <= 1));
    }

    #[test]
    fn test_blur_softens_a_spike() {
        let mut image = GrayImage::new(5, 5);
        image.put_pixel(2, 2, Luma([255]));
        let blurred = gaussian(&image, 3, 0.8);
        assert!(blurred.get_pixel(2, 2)[0] < 255);
        assert!(blurred.get_pixel(1, 2)[0] > 0);
        assert_eq!(blurred.get_pixel(0, 0)[0], 0);
    }
}
