//! Procedural background pattern.
//!
//! CPU twin of the fragment shader in [`crate::shader`]. Arithmetic stays in
//! `f32` so both sides agree on the same `highp` precision, and every
//! pseudo-random value is a fixed hash of its inputs.

use glam::{Vec2, Vec3};

const HASH_DOT: Vec2 = Vec2::new(12.9898, 78.233);
const HASH_SCALE: f32 = 43758.5453;

const OCTAVES: usize = 4;
const DRIFT_SPEED: f32 = 0.1;
const NOISE_SCALE: f32 = 2.0;

const GRADIENT_FALLOFF: f32 = 0.7;
const GRADIENT_WEIGHT: f32 = 0.25;
const NOISE_WEIGHT: f32 = 0.12;

const DARK: Vec3 = Vec3::splat(0.039);
const MID: Vec3 = Vec3::splat(0.065);

const GLOW_COLOR: Vec3 = Vec3::new(1.0, 0.4, 0.0);
const GLOW_CENTER: Vec2 = Vec2::new(0.2, 0.1);
const GLOW_RADIUS: f32 = 0.6;
const GLOW_WEIGHT: f32 = 0.02;

const GRAIN_SPEED: f32 = 100.0;
const GRAIN_AMOUNT: f32 = 0.025;

const VIGNETTE: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Clamp into the displayable range and quantise. Presentation only.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

impl From<Vec3> for Rgb {
    fn from(v: Vec3) -> Self {
        Rgb {
            r: v.x,
            g: v.y,
            b: v.z,
        }
    }
}

/// GLSL `fract`: distance above the floor, so negative inputs stay in [0, 1).
fn fract(x: f32) -> f32 {
    x - x.floor()
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Lattice hash in [0, 1).
pub fn hash(p: Vec2) -> f32 {
    fract(p.dot(HASH_DOT).sin() * HASH_SCALE)
}

/// Value noise over the integer lattice.
///
/// The corner blend is `mix(a, b, u.x) + (c - a) * u.y * (1 - u.x) +
/// (d - b) * u.x * u.y`, which is not the textbook bilinear form. The
/// background's look depends on it, so keep it as written.
pub fn noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;

    let a = hash(i);
    let b = hash(i + Vec2::new(1.0, 0.0));
    let c = hash(i + Vec2::new(0.0, 1.0));
    let d = hash(i + Vec2::new(1.0, 1.0));

    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);
    mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
}

/// Four octaves, amplitude halving from 0.5 and frequency doubling.
pub fn fbm(mut p: Vec2) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    for _ in 0..OCTAVES {
        value += amplitude * noise(p);
        p *= 2.0;
        amplitude *= 0.5;
    }
    value
}

/// Colour of the background at normalised surface coordinate `(u, v)`.
///
/// `aspect` is width over height. `frag_coord` is the pixel coordinate the
/// grain term is hashed from. The result is not clamped.
pub fn evaluate(u: f32, v: f32, time: f32, aspect: f32, frag_coord: Vec2) -> Rgb {
    let uv = Vec2::new(u, v);
    let centered = (uv - 0.5) * Vec2::new(aspect, 1.0);

    let n = fbm(centered * NOISE_SCALE + time * DRIFT_SPEED);

    let gradient = 1.0 - centered.length() * GRADIENT_FALLOFF;
    let pattern = gradient * GRADIENT_WEIGHT + n * NOISE_WEIGHT;
    let mut color = DARK.lerp(MID, pattern.clamp(0.0, 1.0));

    let glow = smoothstep(GLOW_RADIUS, 0.0, (centered - GLOW_CENTER).length()) * GLOW_WEIGHT;
    color = color.lerp(GLOW_COLOR, glow);

    let grain = hash(frag_coord + time * GRAIN_SPEED) * GRAIN_AMOUNT;
    color += Vec3::splat(grain - GRAIN_AMOUNT * 0.5);

    color *= 1.0 - (uv - 0.5).length() * VIGNETTE;

    color.into()
}

