//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Packed 0xRRGGBB colour tag. Presentation decides what it means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const CANNON: Color = Color(0x9db7ff);
    pub const ROCKET: Color = Color(0xff8a3d);
    pub const LASER: Color = Color(0x7aa9ff);
    pub const ENEMY: Color = Color(0xff5ee6);
    pub const ENEMY_SHOT: Color = Color(0xff4aa8);
    pub const DEBRIS: Color = Color(0x33405a);
    pub const BUILDING: Color = Color(0x243b7a);
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given full extents centred on `center`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Shortest distance from `p` to the box surface; zero when inside.
    pub fn distance_to_point(&self, p: Vec3) -> f32 {
        p.clamp(self.min, self.max).distance(p)
    }

    /// Slab test. Returns the ray parameter of the entry point.
    /// A ray whose origin lies inside the box does not hit it.
    pub fn ray_entry(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            if d.abs() < f32::EPSILON {
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (self.min[axis] - o) * inv;
            let mut t1 = (self.max[axis] - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        (t_near >= 0.0).then_some(t_near)
    }
}

/// A half-line used for hitscan queries. `direction` is expected to be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Entry distance into a sphere. Origins inside the sphere do not hit.
    pub fn sphere_entry(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        if c < 0.0 {
            return None;
        }
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -b - disc.sqrt();
        (t >= 0.0).then_some(t)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames processed since the engine was created.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
    /// Delta time of the most recent frame, after clamping.
    pub dt: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.dt = dt;
        self.elapsed_secs += dt as f64;
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate-independent smoothing factor: `1 - base^dt`.
pub fn smoothing(base: f32, dt: f32) -> f32 {
    1.0 - base.powf(dt)
}

pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
