//! Wound region segmentation.
//!
//! A pixel is a wound candidate when its red channel dominates green and blue
//! by `red_dominance`, is brighter than `min_red`, and the pixel is not too
//! dark overall. The raw candidate mask is cleaned with a morphological
//! opening (drops specks) followed by a closing (fills pinholes), both with a
//! disc of radius `morph_radius`.

use image::{Rgb, RgbImage};
use woundcare_core::config::ExtractorConfig;

/// Binary pixel mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.bits[i] = true;
    }

    pub fn count(&self) -> u64 {
        self.bits.iter().filter(|b| **b).count() as u64
    }

    /// The mask with every enclosed hole set.
    ///
    /// Unset pixels 4-connected to the frame border are outside; every other
    /// unset pixel is a hole. Pixels outside the wound outline are never
    /// added, however far apart separate blobs are.
    pub fn fill_holes(&self) -> Mask {
        let (w, h) = (self.width, self.height);
        let mut outside = vec![false; self.bits.len()];
        let mut stack = Vec::new();

        for x in 0..w {
            stack.push((x, 0));
            stack.push((x, h.saturating_sub(1)));
        }
        for y in 0..h {
            stack.push((0, y));
            stack.push((w.saturating_sub(1), y));
        }

        while let Some((x, y)) = stack.pop() {
            if x >= w || y >= h {
                continue;
            }
            let i = self.index(x, y);
            if self.bits[i] || outside[i] {
                continue;
            }
            outside[i] = true;
            if x > 0 {
                stack.push((x - 1, y));
            }
            if y > 0 {
                stack.push((x, y - 1));
            }
            stack.push((x + 1, y));
            stack.push((x, y + 1));
        }

        Mask {
            width: w,
            height: h,
            bits: outside.into_iter().map(|o| !o).collect(),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Segment the wound region of an analysis frame.
pub fn wound_mask(frame: &RgbImage, config: &ExtractorConfig) -> Mask {
    let candidates = Mask::from_fn(frame.width(), frame.height(), |x, y| {
        is_wound_candidate(frame.get_pixel(x, y), config)
    });

    if config.morph_radius == 0 {
        return candidates;
    }
    let disc = disc_offsets(config.morph_radius);
    let opened = dilate(&erode(&candidates, &disc), &disc);
    erode(&dilate(&opened, &disc), &disc)
}

pub fn is_wound_candidate(pixel: &Rgb<u8>, config: &ExtractorConfig) -> bool {
    let [r, g, b] = pixel.0.map(f64::from);
    r > g * config.red_dominance
        && r > b * config.red_dominance
        && r > config.min_red
        && (r + g + b) / 3.0 > config.min_intensity
}

/// Offsets of a filled disc, the digital equivalent of an elliptical
/// structuring element of size `2r+1`.
fn disc_offsets(radius: u32) -> Vec<(i64, i64)> {
    let r = i64::from(radius);
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

// Out-of-frame neighbours are ignored, so borders neither erode nor grow.
fn erode(mask: &Mask, disc: &[(i64, i64)]) -> Mask {
    Mask::from_fn(mask.width, mask.height, |x, y| {
        mask.get(x, y) && neighbours(mask, x, y, disc).all(|set| set)
    })
}

fn dilate(mask: &Mask, disc: &[(i64, i64)]) -> Mask {
    Mask::from_fn(mask.width, mask.height, |x, y| {
        mask.get(x, y) || neighbours(mask, x, y, disc).any(|set| set)
    })
}

fn neighbours<'a>(
    mask: &'a Mask,
    x: u32,
    y: u32,
    disc: &'a [(i64, i64)],
) -> impl Iterator<Item = bool> + 'a {
    let (w, h) = (i64::from(mask.width), i64::from(mask.height));
    disc.iter().filter_map(move |(dx, dy)| {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        (nx >= 0 && ny >= 0 && nx < w && ny < h).then(|| mask.get(nx as u32, ny as u32))
    })
}
