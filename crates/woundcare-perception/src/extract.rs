use std::borrow::Cow;

use image::imageops::FilterType;
use image::{GrayImage, Luma, Rgb, RgbImage};
use woundcare_core::config::ExtractorConfig;
use woundcare_core::models::metrics::MetricSet;

use crate::error::PerceptionError;
use crate::photo::WoundImage;
use crate::segment::{self, Mask};

/// Compute the metric vector for one photograph.
///
/// Fails only for an image with zero area. Any other image, however dark,
/// flat or wound-free, yields a populated `MetricSet`.
pub fn extract(image: &WoundImage, config: &ExtractorConfig) -> Result<MetricSet, PerceptionError> {
    if image.is_empty() {
        return Err(PerceptionError::InvalidImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let frame = fit_to_dimension(image.as_rgb(), config.max_dimension);
    let gray = rgb_to_gray(&frame);
    let total_pixels = u64::from(frame.width()) * u64::from(frame.height());

    let brightness_score = mean_luma(&gray) / 255.0;
    let blur_score = laplacian_variance(&gray);

    let mask = segment::wound_mask(&frame, config);
    let area_px = mask.count();
    let area_pct = area_px as f64 / total_pixels as f64 * 100.0;
    let redness_score = redness(&frame, &mask);
    let exudate_ratio = exudate_ratio(&frame, &mask, config);

    tracing::debug!(
        width = frame.width(),
        height = frame.height(),
        area_px,
        redness_score,
        exudate_ratio,
        brightness_score,
        blur_score,
        "metrics extracted"
    );

    Ok(MetricSet {
        area_px,
        area_pct: area_pct.clamp(0.0, 100.0),
        redness_score: redness_score.clamp(0.0, 1.0),
        exudate_ratio: exudate_ratio.clamp(0.0, 1.0),
        brightness_score: brightness_score.clamp(0.0, 1.0),
        blur_score,
    })
}

/// Downscale so the longer side is at most `max_dimension`. Smaller images
/// are borrowed unchanged.
fn fit_to_dimension(img: &RgbImage, max_dimension: u32) -> Cow<'_, RgbImage> {
    let (w, h) = (img.width(), img.height());
    let longest = w.max(h);
    if max_dimension == 0 || longest <= max_dimension {
        return Cow::Borrowed(img);
    }
    let scale = f64::from(max_dimension) / f64::from(longest);
    let new_w = ((f64::from(w) * scale).round() as u32).max(1);
    let new_h = ((f64::from(h) * scale).round() as u32).max(1);
    Cow::Owned(image::imageops::resize(img, new_w, new_h, FilterType::Triangle))
}

/// ITU-R BT.601 luminance on the 0–255 scale.
fn luma(p: &Rgb<u8>) -> f64 {
    0.299 * f64::from(p.0[0]) + 0.587 * f64::from(p.0[1]) + 0.114 * f64::from(p.0[2])
}

fn rgb_to_gray(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        Luma([luma(rgb.get_pixel(x, y)).round().clamp(0.0, 255.0) as u8])
    })
}

fn mean_luma(gray: &GrayImage) -> f64 {
    let count = gray.width() as usize * gray.height() as usize;
    if count == 0 {
        return 0.0;
    }
    gray.pixels().map(|p| f64::from(p.0[0])).sum::<f64>() / count as f64
}

/// Variance of the 4-neighbour Laplacian `[0,1,0; 1,-4,1; 0,1,0]` over
/// interior pixels. Higher variance means sharper edges.
pub fn laplacian_variance(gray: &GrayImage) -> f64 {
    let (w, h) = (gray.width(), gray.height());
    if w < 3 || h < 3 {
        return 0.0;
    }

    let at = |x: u32, y: u32| f64::from(gray.get_pixel(x, y).0[0]);
    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut count = 0u64;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let laplacian =
                at(x, y - 1) + at(x, y + 1) + at(x - 1, y) + at(x + 1, y) - 4.0 * at(x, y);
            sum += laplacian;
            sum_sq += laplacian * laplacian;
            count += 1;
        }
    }

    let mean = sum / count as f64;
    ((sum_sq / count as f64) - mean * mean).max(0.0)
}

/// Mean of `max(0, R - (G+B)/2) / 255` over the mask; 0 for an empty mask.
fn redness(frame: &RgbImage, mask: &Mask) -> f64 {
    let mut sum = 0.0f64;
    let mut count = 0u64;
    for (x, y, p) in frame.enumerate_pixels() {
        if !mask.get(x, y) {
            continue;
        }
        let [r, g, b] = p.0.map(f64::from);
        sum += (r - (g + b) / 2.0).max(0.0) / 255.0;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Share of bright, low-saturation pixels within the wound outline.
///
/// Slough does not pass the redness predicate, so it shows up as holes in the
/// mask. The region is the mask with its holes filled; skin around the
/// wound and background between separate blobs never count.
fn exudate_ratio(frame: &RgbImage, mask: &Mask, config: &ExtractorConfig) -> f64 {
    let region = mask.fill_holes();

    let mut exudate = 0u64;
    let mut region_px = 0u64;
    for (x, y, p) in frame.enumerate_pixels() {
        if !region.get(x, y) {
            continue;
        }
        region_px += 1;
        if luma(p) >= config.exudate_min_luma && saturation(p) <= config.exudate_max_saturation {
            exudate += 1;
        }
    }

    if region_px == 0 {
        0.0
    } else {
        exudate as f64 / region_px as f64
    }
}

/// HSV saturation in 0–1.
fn saturation(p: &Rgb<u8>) -> f64 {
    let max = p.0.iter().copied().max().unwrap_or(0);
    let min = p.0.iter().copied().min().unwrap_or(0);
    if max == 0 {
        0.0
    } else {
        f64::from(max - min) / f64::from(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_small_frames_borrowed() {
        let img = RgbImage::new(300, 200);
        assert!(matches!(fit_to_dimension(&img, 512), Cow::Borrowed(_)));
        assert!(matches!(fit_to_dimension(&img, 0), Cow::Borrowed(_)));
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let img = RgbImage::new(2048, 1024);
        let fitted = fit_to_dimension(&img, 512);
        assert_eq!((fitted.width(), fitted.height()), (512, 256));
    }

    #[test]
    fn laplacian_zero_on_flat_and_tiny_images() {
        let flat = GrayImage::from_pixel(16, 16, Luma([90]));
        assert_eq!(laplacian_variance(&flat), 0.0);
        let tiny = GrayImage::from_pixel(2, 2, Luma([0]));
        assert_eq!(laplacian_variance(&tiny), 0.0);
    }

    #[test]
    fn saturation_of_grey_and_pure_red() {
        assert_eq!(saturation(&Rgb([128, 128, 128])), 0.0);
        assert_eq!(saturation(&Rgb([200, 0, 0])), 1.0);
        assert_eq!(saturation(&Rgb([0, 0, 0])), 0.0);
    }
}
