/// Record stored for every occupied grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tile {
    pub type_id: u32,
    pub flipped: bool,
    /// Authored height, independent of any running animation.
    pub persistent_offset: f64,
}

impl Tile {
    pub fn new(type_id: u32, flipped: bool) -> Self {
        Self {
            type_id,
            flipped,
            persistent_offset: 0.0,
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }
}
