pub mod events;

pub mod log_renderer;

use std::collections::HashMap;

use glam::DVec2;

use crate::coords::CoordinateMapper;
use crate::grid::{TileGrid, TileKey};
use crate::sprite::SpriteCycler;

pub use events::RenderEvent;
pub use log_renderer::LogRenderer;

/// Everything a drawing backend needs to blit one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub key: TileKey,
    pub type_id: u32,
    /// Sprite frame to draw, 0 for tile types without a cycler
    pub frame: usize,
    pub flipped: bool,
    /// Top-left corner of the sprite on screen, which is the top corner of
    /// the diamond [`CoordinateMapper::screen_to_iso`] picks for `key`
    pub position: DVec2,
    pub offset: f64,
}

/// Placements for every occupied tile, back to front.
pub fn placements(
    grid: &TileGrid,
    mapper: &CoordinateMapper,
    cyclers: &HashMap<u32, SpriteCycler>,
) -> Vec<Placement> {
    grid.iter()
        .map(|(key, tile)| {
            let offset = grid.effective_offset(key);

            Placement {
                key,
                type_id: tile.type_id,
                frame: cyclers.get(&tile.type_id).map_or(0, SpriteCycler::current_index),
                flipped: tile.flipped,
                position: mapper.iso_to_screen(key, offset),
                offset,
            }
        })
        .collect()
}

/// Consumer of the per-frame tile placements
pub trait Renderer {
    type Error;

    /// Initialize the renderer before the first frame
    fn initialize(&mut self, grid: &TileGrid, mapper: &CoordinateMapper) -> Result<(), Self::Error>;

    /// Handle an event from the frame loop
    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error>;

    /// Receive the placements of the current frame
    fn update(&mut self, placements: &[Placement]) -> Result<(), Self::Error> {
        let _ = placements;
        Ok(())
    }

    /// Check if the renderer wants the loop to stop
    fn should_quit(&mut self) -> bool {
        false
    }

    /// Finalize with the state after the last frame
    fn finalize(&mut self, grid: &TileGrid) -> Result<(), Self::Error>;
}
