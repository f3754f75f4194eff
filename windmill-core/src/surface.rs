/// Drawing surface abstraction and a software framebuffer implementing it
use crate::color::Color;

/// The fill-only drawing API the scene renders through.
///
/// Mirrors an immediate-mode 2D renderer: a current draw color, rectangle
/// fills in pixel coordinates and a full clear.
pub trait Surface {
    fn set_draw_color(&mut self, color: Color);

    /// Fill `w` x `h` pixels with their top-left corner at `(x, y)`.
    /// Parts of the rectangle outside the surface are dropped.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Flood the whole surface with the current draw color
    fn clear(&mut self);
}

/// CPU-side pixel buffer in `0RGB` u32 layout, row-major
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    draw_color: Color,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            draw_color: Color::WHITE,
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    fn packed_color(&self) -> u32 {
        self.draw_color.to_argb_u32() & 0x00ff_ffff
    }
}

impl Surface for FrameBuffer {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        // Clip to screen bounds
        let min_x = x.max(0) as i64;
        let min_y = y.max(0) as i64;
        let max_x = (x as i64 + w as i64).min(self.width as i64);
        let max_y = (y as i64 + h as i64).min(self.height as i64);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let color = self.packed_color();
        for row in min_y as usize..max_y as usize {
            let start = row * self.width;
            self.pixels[start + min_x as usize..start + max_x as usize].fill(color);
        }
    }

    fn clear(&mut self) {
        let color = self.packed_color();
        self.pixels.fill(color);
    }
}
