use glam::DVec2;

use crate::grid::{Size, TileKey};

/// Maps tile indices to screen space and back.
///
/// Tile `(i, j)` at vertical offset `o` is placed at
/// `origin + (w/2 * (i - j - 1), h/4 * (i + j + o))` where `w`, `h` are the
/// sprite cell dimensions. Bounds are never checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    cell_width: f64,
    cell_height: f64,
    origin: DVec2,
}

impl CoordinateMapper {
    pub fn new(cell_width: f64, cell_height: f64, origin: DVec2) -> Self {
        Self {
            cell_width,
            cell_height,
            origin,
        }
    }

    pub fn from_size(size: Size, origin: DVec2) -> Self {
        Self::new(size.width as f64, size.height as f64, origin)
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: DVec2) {
        self.origin = origin;
    }

    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }

    /// Same origin, cell dimensions multiplied by `factor`.
    pub fn with_scale(&self, factor: f64) -> Self {
        Self {
            cell_width: self.cell_width * factor,
            cell_height: self.cell_height * factor,
            origin: self.origin,
        }
    }

    pub fn iso_to_screen(&self, key: TileKey, offset: f64) -> DVec2 {
        let (i, j) = (key.i as f64, key.j as f64);

        DVec2::new(
            self.origin.x + self.cell_width / 2.0 * (i - j - 1.0),
            self.origin.y + 0.25 * self.cell_height * (i + j + offset),
        )
    }

    /// Returns the tile whose reference point (as produced by
    /// [`iso_to_screen`](Self::iso_to_screen) at zero offset) is the top
    /// corner of the diamond containing `point`.
    ///
    /// The reference point is also the top-left corner of the sprite, so the
    /// picked diamond is centred on the sprite's left edge, not under the
    /// middle of the sprite. Mouse picking against drawn sprites should shift
    /// the point left by half a cell first.
    pub fn screen_to_iso(&self, point: DVec2) -> TileKey {
        // the forward map shifts x by half a cell, undo it before solving
        let h1 = (point.x - self.origin.x) * 2.0 / self.cell_width + 1.0;
        let h2 = (point.y - self.origin.y) * 4.0 / self.cell_height;

        let i = ((h1 + h2) / 2.0).floor();
        let j = ((h2 - h1) / 2.0).floor();

        TileKey::new(i as i32, j as i32)
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(64.0, 32.0, DVec2::ZERO)
    }
}
