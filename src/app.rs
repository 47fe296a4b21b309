use crate::cli::{AppConfig, EffectConfig};
use crate::coords::CoordinateMapper;
use crate::document;
use crate::grid::{TileGrid, TileKey};
use crate::render::{placements, LogRenderer, RenderEvent, Renderer};
use crate::sprite::SpriteCycler;
use crate::wave::{WaveEffect, WaveKind};

use glam::DVec2;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::fs;
use std::time::Duration;

pub struct IsoApp {
    config: AppConfig,
}

impl IsoApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut grid = self.load_world()?;
        let mapper = CoordinateMapper::from_size(self.config.cell_size, self.config.origin);

        info!("{} tiles loaded", grid.len());

        let mut cyclers: HashMap<u32, SpriteCycler> = self
            .config
            .animated
            .iter()
            .map(|a| (a.type_id, SpriteCycler::new(a.frames, a.period)))
            .collect();

        for effect in self.initial_effects(&grid) {
            grid.spawn_effect(effect);
        }

        let mut renderer = LogRenderer::new();

        renderer.initialize(&grid, &mapper)?;
        renderer.handle_event(&RenderEvent::Started)?;

        // Progress bar
        let progress = ProgressBar::new(self.config.frames);
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len} {msg}",
                )
                .map_err(|e| e.to_string())?
                .progress_chars("#>-"),
        );

        // Main frame loop
        for frame in 0..self.config.frames {
            if renderer.should_quit() {
                break;
            }

            grid.advance(self.config.dt);

            for cycler in cyclers.values_mut() {
                cycler.tick();
            }

            renderer.handle_event(&RenderEvent::Frame(frame))?;
            renderer.update(&placements(&grid, &mapper, &cyclers))?;

            progress.set_position(frame + 1);
            progress.set_message(format!("{} effects", grid.animations().len()));
        }

        renderer.handle_event(&RenderEvent::Completed)?;
        progress.finish();

        renderer.finalize(&grid)?;

        if let Some(path) = &self.config.output_path {
            fs::write(path, document::to_json(&grid)?)?;
            info!("World written to {}", path.display());
        }

        Ok(())
    }

    fn load_world(&self) -> Result<TileGrid, Box<dyn std::error::Error>> {
        match &self.config.input_path {
            Some(path) => {
                let json = fs::read_to_string(path)?;

                Ok(document::from_json(&json)?)
            }
            None => {
                warn!("No world given, starting from an empty grid");

                Ok(TileGrid::new())
            }
        }
    }

    fn initial_effects(&self, grid: &TileGrid) -> Vec<WaveEffect> {
        let config: &EffectConfig = &self.config.effects;

        let mut effects: Vec<WaveEffect> = config
            .spawn
            .iter()
            .map(|spec| effect_at(spec.kind, spec.center.as_vec(), config.amplitude))
            .collect();

        if config.rain > 0 {
            let seed = config.seed.unwrap_or_else(|| OsRng.gen());

            info!("Using seed: {}", seed);

            let mut rng = XorShiftRng::seed_from_u64(seed);
            let keys: Vec<TileKey> = grid.iter().map(|(key, _)| key).collect();

            if keys.is_empty() {
                warn!("No occupied tiles to spawn effects on");
            }

            for _ in 0..config.rain {
                let Some(key) = keys.choose(&mut rng) else {
                    break;
                };

                let kind = match WaveKind::ALL.choose(&mut rng) {
                    Some(WaveKind::Sector { half_width, .. }) => {
                        let angle = rng.gen_range(0.0..TAU);

                        WaveKind::Sector {
                            direction: DVec2::from_angle(angle),
                            half_width: *half_width,
                        }
                    }
                    Some(kind) => *kind,
                    None => WaveKind::Radial,
                };

                effects.push(effect_at(kind, key.as_vec(), config.amplitude));
            }
        }

        effects
    }
}

/// Effect with the editor's spawn parameters.
fn effect_at(kind: WaveKind, center: DVec2, amplitude: f64) -> WaveEffect {
    WaveEffect::new(center, kind)
        .with_amplitude(amplitude)
        .with_ahead(0.8)
        .with_trail(2.0)
}
