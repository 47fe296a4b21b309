//! JSON persistence for a [`TileGrid`].
//!
//! Only occupancy, tile types and flip state are stored. Persistent offsets
//! and running effects are not part of the document.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{TileGrid, TileKey};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid world document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tile_loc has {locations} entries but tile_type has {types}")]
    LengthMismatch { locations: usize, types: usize },

    #[error("tile ({i}, {j}) appears more than once in tile_loc")]
    DuplicateTile { i: i32, j: i32 },

    #[error("flipped tile ({i}, {j}) is not listed in tile_loc")]
    OrphanFlip { i: i32, j: i32 },
}

/// On-disk layout: parallel `tile_loc` / `tile_type` arrays plus the list of
/// flipped keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileDocument {
    pub tile_loc: Vec<[i32; 2]>,
    pub tile_type: Vec<u32>,
    pub flipped: Vec<[i32; 2]>,
}

pub fn serialize(grid: &TileGrid) -> TileDocument {
    let mut document = TileDocument {
        tile_loc: Vec::with_capacity(grid.len()),
        tile_type: Vec::with_capacity(grid.len()),
        flipped: Vec::new(),
    };

    for (key, tile) in grid {
        document.tile_loc.push(key.into());
        document.tile_type.push(tile.type_id);

        if tile.flipped {
            document.flipped.push(key.into());
        }
    }

    document
}

pub fn deserialize(document: &TileDocument) -> Result<TileGrid, ParseError> {
    if document.tile_loc.len() != document.tile_type.len() {
        Err(ParseError::LengthMismatch {
            locations: document.tile_loc.len(),
            types: document.tile_type.len(),
        })?
    }

    let flipped: BTreeSet<TileKey> = document.flipped.iter().copied().map(TileKey::from).collect();
    let mut grid = TileGrid::new();

    for (&loc, &type_id) in document.tile_loc.iter().zip(&document.tile_type) {
        let key = TileKey::from(loc);

        if grid.is_occupied(key) {
            Err(ParseError::DuplicateTile { i: key.i, j: key.j })?
        }

        grid.set_tile(key, type_id, flipped.contains(&key));
    }

    if let Some(orphan) = flipped.iter().find(|&&key| !grid.is_occupied(key)) {
        Err(ParseError::OrphanFlip {
            i: orphan.i,
            j: orphan.j,
        })?
    }

    debug!("Loaded {} tiles, {} flipped", grid.len(), flipped.len());

    Ok(grid)
}

pub fn to_json(grid: &TileGrid) -> serde_json::Result<String> {
    serde_json::to_string(&serialize(grid))
}

pub fn from_json(json: &str) -> Result<TileGrid, ParseError> {
    let document: TileDocument = serde_json::from_str(json)?;

    deserialize(&document)
}
