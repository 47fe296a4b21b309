use super::{Placement, RenderEvent, Renderer};
use crate::coords::CoordinateMapper;
use crate::grid::TileGrid;

use log::{debug, info, trace};

/// Tile count and effective offset range of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub tiles: usize,
    /// Lowest and highest offset, `None` for a frame without tiles
    pub offset_range: Option<(f64, f64)>,
}

impl FrameStats {
    pub fn min_offset(&self) -> Option<f64> {
        self.offset_range.map(|(min, _)| min)
    }

    pub fn max_offset(&self) -> Option<f64> {
        self.offset_range.map(|(_, max)| max)
    }
}

/// Headless renderer that reports placements through the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    frame: u64,
    stats: Vec<FrameStats>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &[FrameStats] {
        &self.stats
    }

    /// Largest displacement in either direction over every frame seen
    pub fn peak_displacement(&self) -> f64 {
        self.stats
            .iter()
            .filter_map(|s| s.offset_range)
            .map(|(min, max)| min.abs().max(max.abs()))
            .fold(0.0, f64::max)
    }
}

impl Renderer for LogRenderer {
    type Error = String;

    fn initialize(&mut self, grid: &TileGrid, mapper: &CoordinateMapper) -> Result<(), Self::Error> {
        let (width, height) = mapper.cell_size();

        if width <= 0.0 || height <= 0.0 {
            return Err(format!("invalid cell size {}x{}", width, height));
        }

        debug!(
            "Rendering {} tiles with {}x{} cells at ({}, {})",
            grid.len(),
            width,
            height,
            mapper.origin().x,
            mapper.origin().y
        );

        Ok(())
    }

    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        match event {
            RenderEvent::Started => {
                self.frame = 0;
                self.stats.clear();
            }
            RenderEvent::Frame(frame) => self.frame = *frame,
            RenderEvent::Completed => info!("Rendered {} frames", self.stats.len()),
        }

        Ok(())
    }

    fn update(&mut self, placements: &[Placement]) -> Result<(), Self::Error> {
        for placement in placements {
            trace!(
                "({}, {}) type {} frame {} at ({:.1}, {:.1}){}",
                placement.key.i,
                placement.key.j,
                placement.type_id,
                placement.frame,
                placement.position.x,
                placement.position.y,
                if placement.flipped { " flipped" } else { "" }
            );
        }

        let offset_range = placements.iter().map(|p| p.offset).fold(None, |range, offset| {
            Some(match range {
                None => (offset, offset),
                Some((min, max)) => (f64::min(min, offset), f64::max(max, offset)),
            })
        });

        self.stats.push(FrameStats {
            frame: self.frame,
            tiles: placements.len(),
            offset_range,
        });

        Ok(())
    }

    fn finalize(&mut self, grid: &TileGrid) -> Result<(), Self::Error> {
        info!(
            "{} tiles, {} effects still running, peak displacement {:.3}",
            grid.len(),
            grid.animations().len(),
            self.peak_displacement()
        );

        Ok(())
    }
}
