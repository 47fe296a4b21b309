use crate::grid::{Size, TileKey};
use crate::wave::WaveKind;
use core::str::FromStr;
use glam::DVec2;
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn parse_origin(s: &str) -> Result<DVec2, String> {
    let (raw_x, raw_y) = s.split_once(',').ok_or(format!("invalid origin: {}", s))?;

    let x = raw_x
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid x: {}", raw_x))?;
    let y = raw_y
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid y: {}", raw_y))?;

    Ok(DVec2::new(x, y))
}

/// Effect to spawn before the first frame, written `kind@i,j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSpec {
    pub kind: WaveKind,
    pub center: TileKey,
}

impl FromStr for EffectSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_kind, raw_center) = s.split_once('@').ok_or(format!("invalid effect: {}", s))?;
        let (raw_i, raw_j) = raw_center
            .split_once(',')
            .ok_or(format!("invalid effect center: {}", raw_center))?;

        let kind = raw_kind.parse::<WaveKind>()?;
        let i = raw_i
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid i: {}", raw_i))?;
        let j = raw_j
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid j: {}", raw_j))?;

        Ok(EffectSpec {
            kind,
            center: TileKey::new(i, j),
        })
    }
}

/// Tile type drawn from several frames, written `type:frames:period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatedType {
    pub type_id: u32,
    pub frames: usize,
    pub period: usize,
}

impl FromStr for AnimatedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();

        let [raw_type, raw_frames, raw_period] = parts.as_slice() else {
            return Err(format!("invalid animated type: {}", s));
        };

        let type_id = raw_type
            .parse::<u32>()
            .map_err(|_| format!("invalid type id: {}", raw_type))?;
        let frames = raw_frames
            .parse::<usize>()
            .map_err(|_| format!("invalid frame count: {}", raw_frames))?;
        let period = raw_period
            .parse::<usize>()
            .map_err(|_| format!("invalid period: {}", raw_period))?;

        Ok(AnimatedType {
            type_id,
            frames,
            period,
        })
    }
}

#[derive(Debug)]
pub struct EffectConfig {
    pub spawn: Vec<EffectSpec>,
    pub rain: usize,
    pub seed: Option<u64>,
    pub amplitude: f64,
}

#[derive(Debug)]
pub struct AppConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub cell_size: Size,
    pub origin: DVec2,
    pub frames: u64,
    pub dt: f64,
    pub effects: EffectConfig,
    pub animated: Vec<AnimatedType>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Isometric Tiles",
    about = "Step wave animations over an isometric tile world"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(parse(from_os_str), help = "World document to load")]
    input: Option<PathBuf>,

    #[structopt(parse(from_os_str), short, long, help = "Write the world document here when done")]
    output: Option<PathBuf>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "64x32",
        help = "Sprite cell size in pixels"
    )]
    cell_size: Size,

    #[structopt(
        parse(try_from_str = parse_origin),
        long,
        default_value = "0,0",
        allow_hyphen_values = true,
        help = "Screen position of the grid origin"
    )]
    origin: DVec2,

    #[structopt(short, long, default_value = "240", help = "Number of frames to simulate")]
    frames: u64,

    #[structopt(long, default_value = "0.016666666666666666", help = "Seconds per frame")]
    dt: f64,

    #[structopt(
        parse(try_from_str),
        short,
        long = "effect",
        number_of_values = 1,
        help = "Spawn an effect before the first frame, e.g. radial@3,4"
    )]
    effects: Vec<EffectSpec>,

    #[structopt(long, default_value = "0", help = "Spawn n effects at random occupied tiles")]
    rain: usize,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(long, default_value = "1.5", help = "Initial amplitude of spawned effects")]
    amplitude: f64,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        number_of_values = 1,
        help = "Animate a tile type, e.g. 3:2:60 for two frames every 60 ticks"
    )]
    animated: Vec<AnimatedType>,

    #[structopt(long, possible_values= &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        if self.dt.is_nan() || self.dt <= 0.0 {
            Err("Frame time must be positive")?
        }

        Ok(AppConfig {
            input_path: self.input,
            output_path: self.output,
            cell_size: self.cell_size,
            origin: self.origin,
            frames: self.frames,
            dt: self.dt,
            effects: EffectConfig {
                spawn: self.effects,
                rain: self.rain,
                seed: self.seed,
                amplitude: self.amplitude,
            },
            animated: self.animated,
        })
    }
}
