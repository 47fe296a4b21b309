use core::str::FromStr;
use std::collections::btree_map;
use std::collections::BTreeMap;

use glam::DVec2;
use log::debug;

use crate::animation::AnimationField;
use crate::coords::CoordinateMapper;
use crate::tile::Tile;
use crate::wave::WaveEffect;

/// Integer cell index in isometric space. Any pair is a legal key.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct TileKey {
    pub i: i32,
    pub j: i32,
}

impl TileKey {
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.i as f64, self.j as f64)
    }
}

impl From<(i32, i32)> for TileKey {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

impl From<[i32; 2]> for TileKey {
    fn from([i, j]: [i32; 2]) -> Self {
        Self::new(i, j)
    }
}

impl From<TileKey> for [i32; 2] {
    fn from(key: TileKey) -> Self {
        [key.i, key.j]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<usize>()
            .map_err(|_| format!("invalid width: {}", raw_width))?;
        let height = raw_height
            .parse::<usize>()
            .map_err(|_| format!("invalid height: {}", raw_height))?;

        if width == 0 || height == 0 {
            Err(format!("size must be non-zero: {}", s))?
        }

        Ok(Size { width, height })
    }
}

/// Sparse isometric terrain plus the wave effects running over it.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    tiles: BTreeMap<TileKey, Tile>,
    animations: AnimationField,
}

pub struct TileGridIter<'a> {
    inner: btree_map::Iter<'a, TileKey, Tile>,
}

impl TileGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Occupied tiles in key order, which is also back-to-front draw order.
    pub fn iter(&self) -> TileGridIter<'_> {
        TileGridIter {
            inner: self.tiles.iter(),
        }
    }

    pub fn tile(&self, key: TileKey) -> Option<&Tile> {
        self.tiles.get(&key)
    }

    pub fn tile_type(&self, key: TileKey) -> Option<u32> {
        self.tile(key).map(|t| t.type_id)
    }

    pub fn is_occupied(&self, key: TileKey) -> bool {
        self.tiles.contains_key(&key)
    }

    /// Inserts a tile, or overwrites type and flip of an existing one.
    pub fn set_tile(&mut self, key: TileKey, type_id: u32, flipped: bool) {
        self.tiles
            .entry(key)
            .and_modify(|tile| {
                tile.type_id = type_id;
                tile.flipped = flipped;
            })
            .or_insert_with(|| Tile::new(type_id, flipped));
    }

    pub fn set_tile_type(&mut self, key: TileKey, type_id: u32) {
        if let Some(tile) = self.tiles.get_mut(&key) {
            tile.type_id = type_id;
        }
    }

    pub fn remove_tile(&mut self, key: TileKey) {
        self.tiles.remove(&key);
    }

    pub fn flip_tile(&mut self, key: TileKey) {
        if let Some(tile) = self.tiles.get_mut(&key) {
            tile.flip();
        }
    }

    pub fn persistent_offset(&self, key: TileKey) -> f64 {
        self.tile(key).map_or(0.0, |t| t.persistent_offset)
    }

    /// Ignored for unoccupied keys.
    pub fn set_persistent_offset(&mut self, key: TileKey, value: f64) {
        if let Some(tile) = self.tiles.get_mut(&key) {
            tile.persistent_offset = value;
        }
    }

    /// Persistent offset plus every running effect. Unoccupied keys get the
    /// animation part only, which placement previews rely on.
    pub fn effective_offset(&self, key: TileKey) -> f64 {
        self.persistent_offset(key) + self.animations.offset_at(key)
    }

    pub fn animations(&self) -> &AnimationField {
        &self.animations
    }

    pub fn spawn_effect(&mut self, effect: WaveEffect) {
        self.animations.spawn(effect);
    }

    pub fn clear_effects(&mut self) {
        if !self.animations.is_empty() {
            debug!("Dropping {} running effects", self.animations.len());
        }

        self.animations.clear();
    }

    pub fn advance(&mut self, dt: f64) {
        self.animations.advance(dt);
    }

    pub fn tile_to_screen(&self, key: TileKey, mapper: &CoordinateMapper) -> DVec2 {
        mapper.iso_to_screen(key, self.effective_offset(key))
    }

    /// Occupied tile under `point`, see [`CoordinateMapper::screen_to_iso`]
    /// for how screen space is split into cells.
    pub fn pick(&self, mapper: &CoordinateMapper, point: DVec2) -> Option<TileKey> {
        let key = mapper.screen_to_iso(point);

        self.is_occupied(key).then_some(key)
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = (TileKey, &'a Tile);
    type IntoIter = TileGridIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for TileGridIter<'a> {
    type Item = (TileKey, &'a Tile);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, tile)| (*key, tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
