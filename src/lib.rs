pub mod animation;
pub mod coords;
pub mod document;
pub mod grid;
pub mod render;
pub mod sprite;
pub mod tile;
pub mod wave;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

pub use animation::AnimationField;
pub use coords::CoordinateMapper;
pub use document::{ParseError, TileDocument};
pub use grid::{Size, TileGrid, TileKey};
pub use sprite::{Cycle, SpriteCycler};
pub use tile::Tile;
pub use wave::{WaveEffect, WaveKind};
