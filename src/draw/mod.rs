use crate::CELL_PAD;
use crate::CELL_SIZE;
use crate::grid::Grid;
use crate::ui::Button;

pub mod icons;

pub use self::icons::Color;
pub use self::icons::Icon;

/// Software framebuffer. A flat array of packed XRGB8888 pixels, row-major,
/// addressed as `x + y * width`, fully repainted every frame.
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::Black.packed(); width * height],
        }
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.packed());
    }

    /// Write one pixel. Out-of-bounds coordinates are dropped, not an error.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[x as usize + y as usize * self.width] = color.packed();
        }
    }

    /// Draw an axis-aligned rectangle, either filled or as a 1-pixel outline.
    ///
    /// Rectangles here are small, so the outline is a per-pixel boundary test
    /// over the bounding box rather than four line draws.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool, color: Color) {
        for cy in y..y + h {
            for cx in x..x + w {
                if filled || cx == x || cy == y || cx == x + w - 1 || cy == y + h - 1 {
                    self.set_pixel(cx, cy, color);
                }
            }
        }
    }

    /// Blit an icon bitmap, magnified nearest-neighbor: each of the 64 bits
    /// becomes a `scale x scale` block, `fg` where the bit is set, `bg`
    /// elsewhere.
    pub fn draw_icon(&mut self, x: i32, y: i32, pad: i32, scale: i32, icon: Icon, fg: Color, bg: Color) {
        let rows = icon.bitmap();

        for (v, row) in rows.iter().enumerate() {
            for h in 0..8 {
                let on = (row >> (7 - h)) & 1 == 1;

                let cx = x + pad + h * scale;
                let cy = y + pad + v as i32 * scale;

                self.draw_rect(cx, cy, scale, scale, true, if on { fg } else { bg });
            }
        }
    }

    /// Draw every cell of the grid as a padded square: filled if the cell is
    /// alive, outline only if dead.
    pub fn draw_grid(&mut self, grid: &Grid) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cx = x as i32 * CELL_SIZE + CELL_PAD;
                let cy = y as i32 * CELL_SIZE + CELL_PAD;

                self.draw_rect(
                    cx,
                    cy,
                    CELL_SIZE - CELL_PAD,
                    CELL_SIZE - CELL_PAD,
                    grid.is_alive(x, y),
                    Color::White,
                );
            }
        }
    }

    /// Draw the control strip: each button's active icon, dark glyph on a
    /// light square, independent of the grid's colors.
    pub fn draw_controls(&mut self, buttons: &[Button]) {
        for button in buttons {
            self.draw_icon(
                button.x,
                button.y,
                button.pad,
                button.scale,
                button.icon(),
                Color::Black,
                Color::White,
            );
        }
    }

    /// Byte view of the pixel buffer, for the host texture upload.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Row stride in bytes.
    pub fn pitch(&self) -> usize {
        self.width * std::mem::size_of::<u32>()
    }
}
