use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use thiserror::Error;

use crate::content::{BadgeText, LineColor};

pub const ICON_SIZE: u32 = 32;
pub const ICON_CONTENT_TYPE: &str = "image/png";

const BADGE_RADIUS: f64 = 7.0;
const SUPERSAMPLE: u32 = 4;

/// Bold 6x6 letterforms, most significant bit is the leftmost column.
type Glyph = [u8; 6];

const GLYPH_WIDTH: u32 = 6;

const GLYPH_M: Glyph = [
    0b100001, 0b110011, 0b111111, 0b101101, 0b100001, 0b100001,
];
const GLYPH_R: Glyph = [
    0b111110, 0b100001, 0b111110, 0b100100, 0b100010, 0b100001,
];

#[derive(Error, Debug)]
pub enum IconError {
    #[error("couldn't encode icon: {0}")]
    Encode(#[from] image::ImageError),
    #[error("couldn't write icon: {0}")]
    Io(#[from] std::io::Error),
}

struct Badge {
    center: (f64, f64),
    fill: LineColor,
    text: BadgeText,
    glyph: Glyph,
}

impl Badge {
    fn covers(&self, x: f64, y: f64) -> bool {
        let (cx, cy) = self.center;
        (x - cx).powi(2) + (y - cy).powi(2) <= BADGE_RADIUS.powi(2)
    }

    fn glyph_covers(&self, x: f64, y: f64) -> bool {
        let half = f64::from(GLYPH_WIDTH) / 2.0;
        let (left, top) = (self.center.0 - half, self.center.1 - half);
        let (col, row) = ((x - left).floor(), (y - top).floor());
        if col < 0.0 || row < 0.0 || col >= f64::from(GLYPH_WIDTH) || row >= self.glyph.len() as f64
        {
            return false;
        }
        let bits = self.glyph[row as usize];
        bits & (1 << (GLYPH_WIDTH - 1 - col as u32)) != 0
    }

    fn sample(&self, x: f64, y: f64) -> Option<[u8; 3]> {
        if !self.covers(x, y) {
            return None;
        }
        if self.glyph_covers(x, y) {
            Some(self.text.rgb())
        } else {
            Some(self.fill.rgb())
        }
    }
}

// Two 14px badges with a 2px gap, centered in the square.
const BADGES: [Badge; 2] = [
    Badge {
        center: (8.0, 16.0),
        fill: LineColor::Orange,
        text: BadgeText::White,
        glyph: GLYPH_M,
    },
    Badge {
        center: (24.0, 16.0),
        fill: LineColor::Yellow,
        text: BadgeText::Black,
        glyph: GLYPH_R,
    },
];

fn shade_pixel(px: u32, py: u32) -> Rgba<u8> {
    let mut sum = [0u32; 3];
    let mut hits = 0u32;
    for sy in 0..SUPERSAMPLE {
        for sx in 0..SUPERSAMPLE {
            let x = f64::from(px) + (f64::from(sx) + 0.5) / f64::from(SUPERSAMPLE);
            let y = f64::from(py) + (f64::from(sy) + 0.5) / f64::from(SUPERSAMPLE);
            if let Some(rgb) = BADGES.iter().find_map(|b| b.sample(x, y)) {
                sum.iter_mut().zip(rgb).for_each(|(s, c)| *s += u32::from(c));
                hits += 1;
            }
        }
    }
    if hits == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let total = SUPERSAMPLE * SUPERSAMPLE;
    let channel = |s: u32| ((s + hits / 2) / hits) as u8;
    let alpha = ((hits * 255 + total / 2) / total) as u8;
    Rgba([channel(sum[0]), channel(sum[1]), channel(sum[2]), alpha])
}

/// Renders the "M"/"R" badge pair on a transparent square.
pub fn render_icon() -> RgbaImage {
    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, shade_pixel)
}

pub fn render_png() -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    render_icon().write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
