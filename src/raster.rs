// Software rasterizer: a 0x00RRGGBB pixel buffer sized to the physical
// viewport, presented directly by the window host. Fills composite
// source-over against whatever is already in the buffer.

use crate::geometry::Triangle;
use crate::render::{Color, DrawTarget};
use crate::viewport::Viewport;

pub struct FrameBuffer {
    viewport: Viewport,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(viewport: Viewport) -> Self {
        let pixels = vec![0; viewport.physical_width() * viewport.physical_height()];
        FrameBuffer { viewport, pixels }
    }

    /// Reallocate for a resized viewport. Prior pixel content is discarded;
    /// the caller must repaint afterwards.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.pixels = vec![0; viewport.physical_width() * viewport.physical_height()];
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn width(&self) -> usize {
        self.viewport.physical_width()
    }

    pub fn height(&self) -> usize {
        self.viewport.physical_height()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    fn blend(&mut self, x: i64, y: i64, color: Color) {
        let w = self.width() as i64;
        let h = self.height() as i64;
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let idx = y as usize * w as usize + x as usize;
        let dst = self.pixels[idx];
        let dr = ((dst >> 16) & 0xFF) as f64;
        let dg = ((dst >> 8) & 0xFF) as f64;
        let db = (dst & 0xFF) as f64;
        let a = color.a.clamp(0.0, 1.0);
        let r = (color.r as f64 * a + dr * (1.0 - a)).round() as u32;
        let g = (color.g as f64 * a + dg * (1.0 - a)).round() as u32;
        let b = (color.b as f64 * a + db * (1.0 - a)).round() as u32;
        self.pixels[idx] = (r << 16) | (g << 8) | b;
    }

    // Stamp a width x width block centered on the sample; width 1 is a
    // single pixel.
    fn plot(&mut self, x: f64, y: f64, color: Color, width: f64) {
        let reach = (width.max(1.0).round() as i64 - 1) / 2;
        let extra = (width.max(1.0).round() as i64 - 1) - reach;
        let cx = x.round() as i64;
        let cy = y.round() as i64;
        for dy in -reach..=extra {
            for dx in -reach..=extra {
                self.blend(cx + dx, cy + dy, color);
            }
        }
    }

    fn stroke_line(&mut self, a: (f64, f64), b: (f64, f64), color: Color, width: f64) {
        let dx = b.0 - a.0;
        let dy = b.1 - a.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.plot(a.0 + dx * t, a.1 + dy * t, color, width);
        }
    }
}

fn orient(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

impl DrawTarget for FrameBuffer {
    fn fill_triangle(&mut self, tri: Triangle, color: Color) {
        let a = self.viewport.to_physical(tri.p1);
        let b = self.viewport.to_physical(tri.p2);
        let c = self.viewport.to_physical(tri.p3);

        let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as i64;
        let max_x = a.0.max(b.0).max(c.0).ceil().min(self.width() as f64) as i64;
        let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as i64;
        let max_y = a.1.max(b.1).max(c.1).ceil().min(self.height() as f64) as i64;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let p = (x as f64 + 0.5, y as f64 + 0.5);
                let w0 = orient(a, b, p);
                let w1 = orient(b, c, p);
                let w2 = orient(c, a, p);
                let inside = (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0)
                    || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0);
                if inside {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_triangle(&mut self, tri: Triangle, color: Color, width: f64) {
        let a = self.viewport.to_physical(tri.p1);
        let b = self.viewport.to_physical(tri.p2);
        let c = self.viewport.to_physical(tri.p3);
        self.stroke_line(a, b, color, width);
        self.stroke_line(b, c, color, width);
        self.stroke_line(c, a, color, width);
    }
}
