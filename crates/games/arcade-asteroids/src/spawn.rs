use std::f32::consts::TAU;

use rand::Rng;
use rand::rngs::StdRng;

use arcade_core::geometry::Vec2;

use crate::Asteroid;
use crate::config::AsteroidsConfig;

/// Irregular outline for rendering: 8–12 points at 0.7–1.2 × radius.
pub fn make_vertices(rng: &mut StdRng, radius: f32) -> Vec<Vec2> {
    let count = 8 + rng.random_range(0..5);
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let r = radius * (0.7 + rng.random::<f32>() * 0.5);
            Vec2::new(angle.cos() * r, angle.sin() * r)
        })
        .collect()
}

/// Spawn an asteroid just outside a random playfield edge, drifting in a
/// random direction at a level-scaled speed.
pub fn spawn_asteroid(rng: &mut StdRng, cfg: &AsteroidsConfig, level: u32) -> Asteroid {
    let m = cfg.spawn_margin;
    let (x, y) = match rng.random_range(0..4) {
        0 => (rng.random::<f32>() * cfg.width, -m),
        1 => (cfg.width + m, rng.random::<f32>() * cfg.height),
        2 => (rng.random::<f32>() * cfg.width, cfg.height + m),
        _ => (-m, rng.random::<f32>() * cfg.height),
    };
    let speed = cfg.asteroid_base_speed
        + rng.random::<f32>() * cfg.asteroid_rand_speed
        + level as f32 * cfg.asteroid_level_speed;
    let heading = rng.random::<f32>() * TAU;
    let radius = cfg.asteroid_min_radius + rng.random::<f32>() * cfg.asteroid_rand_radius;
    Asteroid {
        pos: Vec2::new(x, y),
        vel: Vec2::new(heading.cos() * speed, heading.sin() * speed),
        radius,
        angle: 0.0,
        rot_speed: (rng.random::<f32>() - 0.5) * 0.04,
        vertices: make_vertices(rng, radius),
    }
}

/// Fragments of a destroyed asteroid: exactly `split_count` children at
/// `split_scale` of the parent radius, inheriting a scaled, perturbed
/// version of the parent's velocity.
pub fn fragments(rng: &mut StdRng, cfg: &AsteroidsConfig, parent: &Asteroid) -> Vec<Asteroid> {
    (0..cfg.split_count)
        .map(|_| {
            let heading = rng.random::<f32>() * TAU;
            let speed = parent.vel.x * 0.5 + (rng.random::<f32>() - 0.5) * 2.0;
            let radius = parent.radius * cfg.split_scale;
            Asteroid {
                pos: parent.pos,
                vel: Vec2::new(
                    heading.cos() * speed.abs() + 0.5,
                    heading.sin() * speed.abs() + 0.5,
                ),
                radius,
                angle: 0.0,
                rot_speed: (rng.random::<f32>() - 0.5) * 0.06,
                vertices: make_vertices(rng, radius),
            }
        })
        .collect()
}
