// The paintable surface: an owned RGBA buffer the brush stamps into.
// Visual expectation: the canvas starts as one solid color and accumulates
// square brush marks wherever the pointer has been.

use crate::error::Error;
use crate::types::{Brush, Rgba8};
use image::{Rgba, RgbaImage};

/// Width x height pixels, row-major, top-left origin.
/// `pixels.len() == width * height` from creation until drop; the size is
/// fixed, there is no resize.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelCanvas {
    /// Allocate a canvas with every pixel set to `fill`.
    /// Visual: a solid block of `fill` before any painting happens.
    pub fn new(width: u32, height: u32, fill: Rgba8) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Paint the brush square centered at (cx, cy).
    /// Every in-bounds pixel within `half_width` of the center on both axes
    /// becomes `brush.color`; pixels falling off the canvas are skipped, so
    /// stamping at an edge or entirely outside is fine.
    /// Visual: a solid square appears under the cursor, cropped at the edges.
    pub fn stamp(&mut self, cx: i32, cy: i32, brush: &Brush) {
        let w = self.width as i32;
        let h = self.height as i32;
        let r = brush.half_width;

        for dy in -r..=r {
            for dx in -r..=r {
                let px = cx + dx; // canvas x for this cell of the square
                let py = cy + dy; // canvas y for this cell of the square
                if px < 0 || py < 0 || px >= w || py >= h {
                    continue;
                }
                let idx = py as usize * self.width as usize + px as usize;
                self.pixels[idx] = brush.color;
            }
        }
    }

    /// Reset the whole surface to `fill`.
    /// Visual: all brush marks disappear at once.
    pub fn clear(&mut self, fill: Rgba8) {
        for p in &mut self.pixels {
            *p = fill;
        }
    }

    /// Bounds-checked single-pixel read; None outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Encode the current pixel state into a fresh displayable image.
    /// The returned image is a defensive copy; stamping afterwards never
    /// changes a snapshot already handed out.
    pub fn snapshot(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let p = self.pixels[y as usize * self.width as usize + x as usize];
            Rgba([p.r, p.g, p.b, p.a])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_brush() -> Brush {
        Brush::default()
    }

    #[test]
    fn new_fills_every_pixel() {
        let canvas = PixelCanvas::new(10, 10, Rgba8::RED).unwrap();
        let snap = canvas.snapshot();
        assert_eq!(snap.dimensions(), (10, 10));
        assert!(snap.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            PixelCanvas::new(0, 10, Rgba8::RED),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(matches!(
            PixelCanvas::new(10, 0, Rgba8::RED),
            Err(Error::InvalidDimension { width: 10, height: 0 })
        ));
    }

    #[test]
    fn stamp_paints_exactly_the_square() {
        let mut canvas = PixelCanvas::new(100, 100, Rgba8::WHITE).unwrap();
        canvas.stamp(50, 50, &black_brush());

        for y in 0..100i32 {
            for x in 0..100i32 {
                let inside = (x - 50).abs() <= 5 && (y - 50).abs() <= 5;
                let expect = if inside { Rgba8::BLACK } else { Rgba8::WHITE };
                assert_eq!(canvas.pixel(x, y), Some(expect), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn corner_stamp_is_clipped() {
        let mut canvas = PixelCanvas::new(100, 100, Rgba8::WHITE).unwrap();
        canvas.stamp(0, 0, &black_brush());

        // Only the 6x6 block [0,5]x[0,5] survives the clip.
        for y in 0..100 {
            for x in 0..100 {
                let inside = x <= 5 && y <= 5;
                let expect = if inside { Rgba8::BLACK } else { Rgba8::WHITE };
                assert_eq!(canvas.pixel(x, y), Some(expect), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn fully_off_canvas_stamp_changes_nothing() {
        let mut canvas = PixelCanvas::new(20, 20, Rgba8::RED).unwrap();
        let before = canvas.snapshot();
        canvas.stamp(-10, -10, &black_brush());
        canvas.stamp(100, 5, &black_brush());
        assert_eq!(canvas.snapshot().as_raw(), before.as_raw());
    }

    #[test]
    fn stamp_is_idempotent() {
        let mut once = PixelCanvas::new(50, 50, Rgba8::RED).unwrap();
        once.stamp(20, 30, &black_brush());

        let mut twice = PixelCanvas::new(50, 50, Rgba8::RED).unwrap();
        twice.stamp(20, 30, &black_brush());
        twice.stamp(20, 30, &black_brush());

        assert_eq!(once.snapshot().as_raw(), twice.snapshot().as_raw());
    }

    #[test]
    fn disjoint_stamps_commute() {
        let mut ab = PixelCanvas::new(60, 60, Rgba8::WHITE).unwrap();
        ab.stamp(10, 10, &black_brush());
        ab.stamp(40, 40, &black_brush());

        let mut ba = PixelCanvas::new(60, 60, Rgba8::WHITE).unwrap();
        ba.stamp(40, 40, &black_brush());
        ba.stamp(10, 10, &black_brush());

        assert_eq!(ab.snapshot().as_raw(), ba.snapshot().as_raw());
    }

    #[test]
    fn centered_stamp_covers_small_canvas() {
        // On 10x10 the clipped footprint of a stamp at (4,4) is
        // [-1,9]x[-1,9] intersected with the canvas, i.e. every pixel:
        // (9,9) is painted too since |9-4| = 5 is within the half width.
        let mut canvas = PixelCanvas::new(10, 10, Rgba8::WHITE).unwrap();
        canvas.stamp(4, 4, &black_brush());
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.pixel(x, y), Some(Rgba8::BLACK), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn snapshot_is_detached_from_later_stamps() {
        let mut canvas = PixelCanvas::new(30, 30, Rgba8::RED).unwrap();
        let before = canvas.snapshot();
        canvas.stamp(15, 15, &black_brush());
        assert_eq!(before.get_pixel(15, 15).0, [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(15, 15), Some(Rgba8::BLACK));
    }

    #[test]
    fn clear_resets_all_marks() {
        let mut canvas = PixelCanvas::new(30, 30, Rgba8::RED).unwrap();
        canvas.stamp(5, 5, &black_brush());
        canvas.stamp(25, 25, &black_brush());
        canvas.clear(Rgba8::RED);
        let snap = canvas.snapshot();
        assert!(snap.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn pixel_read_is_bounds_checked() {
        let canvas = PixelCanvas::new(10, 10, Rgba8::RED).unwrap();
        assert_eq!(canvas.pixel(-1, 0), None);
        assert_eq!(canvas.pixel(0, -1), None);
        assert_eq!(canvas.pixel(10, 0), None);
        assert_eq!(canvas.pixel(0, 10), None);
        assert_eq!(canvas.pixel(9, 9), Some(Rgba8::RED));
    }
}
