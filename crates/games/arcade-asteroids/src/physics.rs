use arcade_core::geometry::wrap;

use crate::{AsteroidsState, Ship};
use crate::config::AsteroidsConfig;

/// Integrate the ship one frame: turn, thrust along the facing, drag, and
/// toroidal wrap.
pub fn step_ship(
    ship: &mut Ship,
    cfg: &AsteroidsConfig,
    turn_left: bool,
    turn_right: bool,
    thrusting: bool,
) {
    if turn_left {
        ship.angle -= cfg.turn_rate;
    }
    if turn_right {
        ship.angle += cfg.turn_rate;
    }
    ship.thrusting = thrusting;
    if thrusting {
        ship.vel.x += ship.angle.cos() * cfg.thrust;
        ship.vel.y += ship.angle.sin() * cfg.thrust;
    }
    ship.vel.x *= cfg.friction;
    ship.vel.y *= cfg.friction;
    ship.pos.x = wrap(ship.pos.x + ship.vel.x, cfg.width);
    ship.pos.y = wrap(ship.pos.y + ship.vel.y, cfg.height);
}

/// Advance bullets: expire, move, wrap, age.
pub fn step_bullets(state: &mut AsteroidsState, cfg: &AsteroidsConfig) {
    state.bullets.retain(|b| b.life > 0);
    for b in &mut state.bullets {
        b.pos.x = wrap(b.pos.x + b.vel.x, cfg.width);
        b.pos.y = wrap(b.pos.y + b.vel.y, cfg.height);
        b.life -= 1;
    }
}

/// Advance asteroids: drift, wrap, spin.
pub fn step_asteroids(state: &mut AsteroidsState, cfg: &AsteroidsConfig) {
    for a in &mut state.asteroids {
        a.pos.x = wrap(a.pos.x + a.vel.x, cfg.width);
        a.pos.y = wrap(a.pos.y + a.vel.y, cfg.height);
        a.angle += a.rot_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::geometry::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn ship_at(x: f32, y: f32) -> Ship {
        Ship {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            angle: -FRAC_PI_2,
            thrusting: false,
        }
    }

    #[test]
    fn thrust_accelerates_along_facing() {
        let cfg = AsteroidsConfig::default();
        let mut ship = ship_at(240.0, 260.0);
        step_ship(&mut ship, &cfg, false, false, true);
        assert!(ship.vel.y < 0.0, "Facing up, thrust moves the ship up");
        assert!(ship.vel.x.abs() < 1e-4);
    }

    #[test]
    fn friction_decays_velocity() {
        let cfg = AsteroidsConfig::default();
        let mut ship = ship_at(240.0, 260.0);
        ship.vel = Vec2::new(4.0, 0.0);
        step_ship(&mut ship, &cfg, false, false, false);
        assert!((ship.vel.x - 4.0 * cfg.friction).abs() < 1e-5);
    }

    #[test]
    fn ship_wraps_around_edges() {
        let cfg = AsteroidsConfig::default();
        let mut ship = ship_at(1.0, 260.0);
        ship.vel = Vec2::new(-5.0, 0.0);
        // Friction shrinks the step slightly; still crosses the edge.
        step_ship(&mut ship, &cfg, false, false, false);
        assert!(
            ship.pos.x > cfg.width - 10.0,
            "Ship must wrap to the right edge, got {}",
            ship.pos.x
        );
        assert!((0.0..cfg.width).contains(&ship.pos.x));
    }

    #[test]
    fn turning_changes_heading_only() {
        let cfg = AsteroidsConfig::default();
        let mut ship = ship_at(240.0, 260.0);
        let angle = ship.angle;
        step_ship(&mut ship, &cfg, true, false, false);
        assert!((ship.angle - (angle - cfg.turn_rate)).abs() < 1e-6);
        assert_eq!(ship.vel, Vec2::ZERO);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The wrap boundary policy: wherever the ship starts and
            // however it is steered, the movement step leaves it inside
            // [0,W)×[0,H).
            #[test]
            fn ship_stays_in_bounds(
                x in -1000.0f32..1000.0,
                y in -1000.0f32..1000.0,
                steps in 1usize..120,
                left in proptest::bool::ANY,
                thrust in proptest::bool::ANY,
            ) {
                let cfg = AsteroidsConfig::default();
                let mut ship = ship_at(0.0, 0.0);
                ship.pos = Vec2::new(x, y);
                for _ in 0..steps {
                    step_ship(&mut ship, &cfg, left, !left, thrust);
                }
                prop_assert!((0.0..cfg.width).contains(&ship.pos.x), "x = {}", ship.pos.x);
                prop_assert!((0.0..cfg.height).contains(&ship.pos.y), "y = {}", ship.pos.y);
            }
        }
    }
}
