// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the painted canvas.
// 2) A square outline that follows your mouse, previewing where the
//    next brush stamp will land.

use crate::error::Error;
use crate::types::Rgba8;
use image::{Rgba, RgbaImage};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,    // the on-screen window you see
    scratch: Vec<u32>, // reused 0x00RRGGBB buffer handed to minifb each frame
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self {
            window,
            scratch: Vec::with_capacity(width * height),
        })
    }

    /// Push a snapshot to the screen.
    /// The RGBA bytes are packed into the 0x00RRGGBB layout minifb wants;
    /// alpha is dropped since the window itself is opaque.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, frame: &RgbaImage) -> Result<(), Error> {
        let (width, height) = frame.dimensions();

        self.scratch.clear();
        for Rgba([r, g, b, _a]) in frame.pixels() {
            self.scratch
                .push(((*r as u32) << 16) | ((*g as u32) << 8) | (*b as u32));
        }

        self.window
            .update_with_buffer(&self.scratch, width as usize, height as usize)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    /// The window is created at exactly the canvas size, so these are canvas
    /// coordinates as well.
    pub fn mouse_pos(&self) -> Option<(usize, usize)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as usize, y.max(0.0) as usize))
    }

    /// Visual: while this is true, squares are stamped at the mouse position.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: when pressed, the canvas resets to its fill color.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }
}

/* ---------- Software drawing on a snapshot (never on the canvas) ---------- */

/// Put a pixel on the frame if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(frame: &mut RgbaImage, x: i32, y: i32, color: Rgba8) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= frame.width() || y >= frame.height() {
        return;
    }
    frame.put_pixel(x, y, Rgba([color.r, color.g, color.b, color.a]));
}

/// Draw the square border one pixel outside the brush footprint, centered
/// at (cx, cy). Drawn onto a snapshot copy, so the canvas itself keeps no
/// trace of the cursor. Off-frame border pixels are dropped, same clipping
/// as the stamp itself.
/// Visual: a thin hollow square follows your mouse.
pub fn draw_brush_outline(frame: &mut RgbaImage, cx: i32, cy: i32, half_width: i32, color: Rgba8) {
    let r = half_width + 1;
    for x in (cx - r)..=(cx + r) {
        put_pixel(frame, x, cy - r, color); // top edge
        put_pixel(frame, x, cy + r, color); // bottom edge
    }
    for y in (cy - r)..=(cy + r) {
        put_pixel(frame, cx - r, y, color); // left edge
        put_pixel(frame, cx + r, y, color); // right edge
    }
}
