// What you SEE now:
// • A solid red canvas fills the window.
// • Hold Left Mouse: black squares are stamped under the cursor; dragging
//   leaves a trail of them.
// • A hollow square follows the mouse, previewing the next stamp.
// • C clears the canvas back to red. ESC quits.

mod canvas;
mod draw;
mod error;
mod types;

use canvas::PixelCanvas;
use draw::{draw_brush_outline, Drawer};
use error::Error;
use std::time::{Duration, Instant};
use types::{Brush, Rgba8};

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 480;
const FILL: Rgba8 = Rgba8::RED;

fn main() -> Result<(), Error> {
    /* --- Canvas + window setup ---
       Visual: window opens showing the solid fill color. */
    let mut canvas = PixelCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, FILL)?;
    let mut drawer = Drawer::new(
        "Fingerpaint — Stamp Brush",
        canvas.width() as usize,
        canvas.height() as usize,
    )?;

    /* --- Brush ---
       Visual: fixed 11x11 opaque black square per stamp. */
    let brush = Brush::default();

    /* --- FPS (terminal only) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs */
        if drawer.c_pressed_once() {
            // Visual: every stamp disappears, solid fill again
            canvas.clear(FILL);
        }

        // Paint while holding left mouse: press and drag both stamp.
        if drawer.left_mouse_down() {
            if let Some((mx, my)) = drawer.mouse_pos() {
                canvas.stamp(mx as i32, my as i32, &brush); // visual: square appears
            }
        }

        /* 2) Snapshot for display.
           The copy is what gets decorated and shown; the canvas itself only
           ever holds paint. */
        let mut frame = canvas.snapshot();

        /* 3) Brush preview on top of the snapshot */
        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_brush_outline(
                &mut frame,
                mx as i32,
                my as i32,
                brush.half_width,
                Rgba8::YELLOW, // visual: yellow hollow square at the cursor
            );
        }

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&frame)?;

        /* 5) FPS counter (prints to terminal once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            println!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
