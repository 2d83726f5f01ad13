//! Spiral galaxy point-cloud generation.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use super::params::GalaxyParameters;
use super::rng::RandomSource;

/// Positions and colors for one galaxy. Both buffers have one entry per particle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleCloud {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
}

impl ParticleCloud {
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One rotated copy of a galaxy inside the group.
#[derive(Debug, Clone)]
pub struct GalaxyInstance {
    pub cloud: ParticleCloud,
    /// Rotation about the vertical (Y) axis relative to the first instance.
    pub offset_angle: f32,
    /// Tilt about Z taken from the parameter set's initial rotation.
    pub tilt: f32,
}

impl GalaxyInstance {
    /// Object-to-group transform: spread about Y, then tilt.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.offset_angle) * Mat4::from_rotation_z(self.tilt)
    }
}

/// Build one particle cloud.
///
/// Radii are uniform over `[0, radius)`, not over disk area, so particles
/// bunch toward the core. `branches` should be at least 2; smaller values
/// still produce finite output.
pub fn generate<R: RandomSource + ?Sized>(params: &GalaxyParameters, rng: &mut R) -> ParticleCloud {
    let count = params.particle_count as usize;
    let branches = params.branches.max(1);
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for i in 0..count {
        let radius = rng.next_f32() * params.radius;
        let spin_angle = radius * params.spin;
        let branch_angle = (i as u32 % branches) as f32 / branches as f32 * TAU;

        let mut jitter = [0.0f32; 3];
        for axis in jitter.iter_mut() {
            let magnitude = rng.next_f32().powf(params.randomness_power);
            let sign = if rng.coin() { 1.0 } else { -1.0 };
            *axis = magnitude * sign * params.randomness * radius;
        }

        let angle = branch_angle + spin_angle;
        positions.push([
            angle.cos() * radius + jitter[0],
            jitter[1],
            angle.sin() * radius + jitter[2],
        ]);

        let mixed = params
            .inside_color
            .lerp(params.outside_color, color_factor(radius, params.radius));
        colors.push(mixed.to_array());
    }

    ParticleCloud { positions, colors }
}

/// Gradient position for a particle at `radius`; zero (inside color) when
/// the galaxy radius is degenerate.
#[inline]
fn color_factor(radius: f32, max_radius: f32) -> f32 {
    if max_radius > 0.0 && max_radius.is_finite() {
        let t = radius / max_radius;
        if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
    } else {
        0.0
    }
}

/// Offset angle for instance `index` of `count`: `π · index / count`.
#[inline]
pub fn instance_offset(index: u32, count: u32) -> f32 {
    if count <= 1 {
        0.0
    } else {
        PI * index as f32 / count as f32
    }
}

/// Generate `instance_count` independently drawn copies, spread about Y.
pub fn generate_instances<R: RandomSource + ?Sized>(
    params: &GalaxyParameters,
    rng: &mut R,
) -> Vec<GalaxyInstance> {
    let count = params.instance_count.max(1);
    (0..count)
        .map(|i| GalaxyInstance {
            cloud: generate(params, rng),
            offset_angle: instance_offset(i, count),
            tilt: params.initial_rotation,
        })
        .collect()
}
