//! Starfield background
//!
//! Generates a seeded shell of stars around the origin and projects it onto
//! a 2D viewport through a perspective camera sitting just off-centre.
//!
//! ## Pipeline
//!
//! ```text
//! StarfieldConfig ──generate──▶ Starfield (3D points, sizes, colours)
//!                                   │
//!                 Rotation ─────────┤ project (rotate XYZ, perspective)
//!                                   ▼
//!                            Vec<ProjectedStar> ──layers──▶ Vec<StarLayer>
//!                                                       (one SVG path each)
//! ```
//!
//! Batching stars into a few size/colour layers keeps each rendered frame to
//! a handful of DOM nodes instead of one per star.

use std::collections::BTreeMap;
use std::f32::consts::TAU;
use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::rotation::Rotation;

/// Nearest distance in front of the camera that is still drawn
const NEAR_PLANE: f32 = 0.1;

/// Point-size attenuation numerator
const SIZE_ATTENUATION: f32 = 30.0;

/// Starfield appearance and animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Inner radius of the star shell
    pub radius: f32,
    /// Thickness of the star shell
    pub depth: f32,
    pub count: usize,
    /// Star size multiplier
    pub factor: f32,
    /// Colour saturation, 0 for white stars
    pub saturation: f32,
    /// Soft-edged stars
    pub fade: bool,
    /// Twinkle speed
    pub speed: f32,
    pub camera_z: f32,
    pub fov_degrees: f32,
    /// Delay between animation frames
    pub frame_interval_ms: u64,
    pub seed: u64,
    /// Number of size buckets stars are batched into when rendering
    pub size_buckets: usize,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            fade: true,
            speed: 1.0,
            camera_z: 1.0,
            fov_degrees: 75.0,
            frame_interval_ms: 16,
            seed: 0x5747_4152,
            size_buckets: 4,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> SiteResult<()> {
        let invalid = |msg: &str| Err(SiteError::InvalidConfiguration(format!("starfield {msg}")));

        if !(self.radius > 0.0) {
            return invalid("radius must be positive");
        }
        if !(self.depth >= 0.0) {
            return invalid("depth must not be negative");
        }
        if !(self.factor >= 0.0) {
            return invalid("factor must not be negative");
        }
        if !(0.0..=1.0).contains(&self.saturation) {
            return invalid("saturation must be within 0..=1");
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return invalid("fov_degrees must be within (0, 180)");
        }
        if self.frame_interval_ms == 0 {
            return invalid("frame_interval_ms must be greater than zero");
        }
        if self.size_buckets == 0 {
            return invalid("size_buckets must be greater than zero");
        }
        Ok(())
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Convert from HSL, all components in `0..=1`.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        if s <= 0.0 {
            let v = channel(l);
            return Rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(1.0);

        Rgb(
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Snap each channel to the centre of a 16-wide band.
    fn quantized(&self) -> Self {
        let snap = |c: u8| (c & 0xF0) | 0x08;
        Rgb(snap(self.0), snap(self.1), snap(self.2))
    }
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A star in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: [f32; 3],
    pub size: f32,
    pub color: Rgb,
}

/// A star on screen, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
}

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// A batch of same-size, same-colour stars drawn as one SVG path of round dots
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    pub color: String,
    pub stroke_width: f32,
    /// `M x y h0` segments; draw with `stroke-linecap: round`
    pub path: String,
    pub count: usize,
}

/// Global size pulse, in `[2, 4]`
pub fn twinkle(elapsed_secs: f32, speed: f32) -> f32 {
    3.0 + (elapsed_secs * speed + 100.0).sin()
}

/// Generated star shell
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    camera_z: f32,
    fov_degrees: f32,
}

impl Starfield {
    /// Deterministically generate stars from the config's seed.
    ///
    /// The shell radius starts at `radius + depth` and shrinks by a random
    /// fraction of `depth / count` per star, so stars fill the shell from the
    /// outside in.
    pub fn generate(config: &StarfieldConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut r = config.radius + config.depth;
        let increment = if config.count > 0 {
            config.depth / config.count as f32
        } else {
            0.0
        };

        let stars = (0..config.count)
            .map(|i| {
                r -= increment * rng.random::<f32>();
                let polar = (1.0 - rng.random::<f32>() * 2.0).acos();
                let azimuth = rng.random::<f32>() * TAU;
                let position = [
                    r * polar.sin() * azimuth.sin(),
                    r * polar.cos(),
                    r * polar.sin() * azimuth.cos(),
                ];
                let hue = i as f32 / config.count as f32;
                Star {
                    position,
                    size: (0.5 + 0.5 * rng.random::<f32>()) * config.factor,
                    color: Rgb::from_hsl(hue, config.saturation, 0.9),
                }
            })
            .collect();

        Self {
            stars,
            camera_z: config.camera_z,
            fov_degrees: config.fov_degrees,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Rotate the shell and project every visible star onto the viewport.
    pub fn project(&self, rotation: Rotation, viewport: Viewport, twinkle: f32) -> Vec<ProjectedStar> {
        let (sin_x, cos_x) = rotation.x.sin_cos();
        let (sin_y, cos_y) = rotation.y.sin_cos();
        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let aspect = viewport.aspect();

        self.stars
            .iter()
            .filter_map(|star| {
                let [x, y, z] = star.position;

                // Euler XYZ: apply Ry, then Rx
                let x1 = x * cos_y + z * sin_y;
                let z1 = -x * sin_y + z * cos_y;
                let y2 = y * cos_x - z1 * sin_x;
                let z2 = y * sin_x + z1 * cos_x;

                let distance = self.camera_z - z2;
                if distance <= NEAR_PLANE {
                    return None;
                }

                let ndc_x = x1 * focal / aspect / distance;
                let ndc_y = y2 * focal / distance;
                if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
                    return None;
                }

                Some(ProjectedStar {
                    x: (ndc_x + 1.0) / 2.0 * viewport.width,
                    y: (1.0 - ndc_y) / 2.0 * viewport.height,
                    radius: star.size * SIZE_ATTENUATION / distance * twinkle / 2.0,
                    color: star.color,
                })
            })
            .collect()
    }
}

/// Batch projected stars into at most `buckets` size classes per colour.
///
/// Each layer's stroke width is the diameter at the centre of its size
/// class. Layers come out ordered smallest first.
pub fn layers(projected: &[ProjectedStar], buckets: usize) -> Vec<StarLayer> {
    if projected.is_empty() || buckets == 0 {
        return Vec::new();
    }

    let (min, max) = projected
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), s| (lo.min(s.radius), hi.max(s.radius)));
    let span = (max - min).max(f32::EPSILON);
    let width = span / buckets as f32;

    let mut grouped: BTreeMap<(usize, Rgb), (String, usize)> = BTreeMap::new();
    for star in projected {
        let bucket = (((star.radius - min) / width) as usize).min(buckets - 1);
        let entry = grouped
            .entry((bucket, star.color.quantized()))
            .or_insert_with(|| (String::new(), 0));
        // Writing to a String cannot fail
        let _ = write!(entry.0, "M{:.1} {:.1}h0", star.x, star.y);
        entry.1 += 1;
    }

    grouped
        .into_iter()
        .map(|((bucket, color), (path, count))| StarLayer {
            color: color.hex(),
            stroke_width: 2.0 * (min + width * (bucket as f32 + 0.5)),
            path,
            count,
        })
        .collect()
}
