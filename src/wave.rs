use core::fmt;
use core::str::FromStr;
use std::f64::consts::FRAC_PI_4;

use glam::DVec2;

use crate::grid::TileKey;

/// Amplitude at or below which an effect is considered spent.
pub const EPSILON: f64 = 1e-14;

const MIN_ANGLE_LENGTH: f64 = 1e-13;

/// Hermite step between `lo` and `hi`: 0 at or below `lo`, 1 at or above
/// `hi`, `t²(3 - 2t)` in between.
pub fn smoothstep(lo: f64, hi: f64, x: f64) -> f64 {
    if hi == lo {
        return if x < lo { 0.0 } else { 1.0 };
    }

    let t = ((x - lo) / (hi - lo)).clamp(0.0, 1.0);

    t * t * (3.0 - 2.0 * t)
}

/// Unit-height band around zero rising over `trail` units behind it and
/// falling over `ahead` units in front of it.
pub fn two_sided_band(trail: f64, ahead: f64, x: f64) -> f64 {
    if x < 0.0 {
        smoothstep(-trail, 0.0, x)
    } else {
        1.0 - smoothstep(0.0, ahead, x)
    }
}

/// Angle in radians between two vectors, 0 if either is (nearly) zero.
pub fn angle_between(a: DVec2, b: DVec2) -> f64 {
    let (la, lb) = (a.length(), b.length());

    if la <= MIN_ANGLE_LENGTH || lb <= MIN_ANGLE_LENGTH {
        return 0.0;
    }

    (a.dot(b) / (la * lb)).clamp(-1.0, 1.0).acos()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveKind {
    /// Circular ripple expanding in every direction.
    Radial,
    /// Ripple restricted to the row and column through the center.
    Cross,
    /// Ripple confined to a wedge around `direction`.
    Sector { direction: DVec2, half_width: f64 },
}

impl WaveKind {
    pub const ALL: [WaveKind; 3] = [
        WaveKind::Sector {
            direction: DVec2::X,
            half_width: FRAC_PI_4,
        },
        WaveKind::Cross,
        WaveKind::Radial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WaveKind::Radial => "radial",
            WaveKind::Cross => "cross",
            WaveKind::Sector { .. } => "sector",
        }
    }
}

impl fmt::Display for WaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radial" => Ok(WaveKind::Radial),
            "cross" => Ok(WaveKind::Cross),
            "sector" => Ok(WaveKind::Sector {
                direction: DVec2::X,
                half_width: FRAC_PI_4,
            }),
            _ => Err(format!("unknown effect: {}", s)),
        }
    }
}

/// A decaying wavefront travelling outwards from `center`.
///
/// The front sits at distance `elapsed_time` from the center and advances by
/// `speed` tile units per unit of time. Amplitude decays linearly by
/// `dampening` per unit of time; once it reaches [`EPSILON`] the effect is
/// dead and gets evicted by its [`AnimationField`](crate::animation::AnimationField).
#[derive(Debug, Clone, PartialEq)]
pub struct WaveEffect {
    center: DVec2,
    elapsed_time: f64,
    speed: f64,
    trail: f64,
    ahead: f64,
    dampening: f64,
    amplitude: f64,
    kind: WaveKind,
}

impl WaveEffect {
    pub fn new(center: DVec2, kind: WaveKind) -> Self {
        Self {
            center,
            elapsed_time: 0.0,
            speed: 3.0,
            trail: 2.0,
            ahead: 1.0,
            dampening: 0.3,
            amplitude: 1.0,
            kind,
        }
    }

    pub fn radial(center: DVec2) -> Self {
        Self::new(center, WaveKind::Radial)
    }

    pub fn cross(center: DVec2) -> Self {
        Self::new(center, WaveKind::Cross)
    }

    pub fn sector(center: DVec2, direction: DVec2, half_width: f64) -> Self {
        Self::new(center, WaveKind::Sector { direction, half_width })
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_trail(mut self, trail: f64) -> Self {
        self.trail = trail;
        self
    }

    pub fn with_ahead(mut self, ahead: f64) -> Self {
        self.ahead = ahead;
        self
    }

    pub fn with_dampening(mut self, dampening: f64) -> Self {
        self.dampening = dampening;
        self
    }

    /// Negative values are stored as 0.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude.max(0.0);
        self
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn kind(&self) -> WaveKind {
        self.kind
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn is_alive(&self) -> bool {
        self.amplitude > EPSILON
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed_time += dt * self.speed;
        self.amplitude = (self.amplitude - self.dampening * dt).max(0.0);
    }

    /// Contribution of this effect to the height of `key`. Negative values
    /// lower the tile.
    pub fn offset_at(&self, key: TileKey) -> f64 {
        let delta = key.as_vec() - self.center;

        let shape = match self.kind {
            WaveKind::Radial => 1.0,
            WaveKind::Cross => {
                if key.i as f64 == self.center.x || key.j as f64 == self.center.y {
                    1.0
                } else {
                    return 0.0;
                }
            }
            WaveKind::Sector {
                direction,
                half_width,
            } => 1.0 - smoothstep(0.0, half_width, angle_between(direction, delta)),
        };

        let band = two_sided_band(self.trail, self.ahead, delta.length() - self.elapsed_time);

        -self.amplitude * band * shape
    }
}
