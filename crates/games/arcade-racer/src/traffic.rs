use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::RacerConfig;

/// Number of obstacle paint jobs in the palette.
pub const OBSTACLE_COLOR_COUNT: usize = 5;

/// An oncoming car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub lane: usize,
    /// Top edge y; spawns just above the screen.
    pub y: f32,
    /// Palette index for rendering.
    pub color: usize,
}

/// Scroll speed for the given distance score.
pub fn speed_for(cfg: &RacerConfig, score: u32) -> f32 {
    cfg.base_speed + (score / 100) as f32 * cfg.speed_step
}

/// Spawn interval for the given distance score: traffic densifies with
/// progress down to the floor.
pub fn spawn_interval_for(cfg: &RacerConfig, score: u32) -> u64 {
    cfg.spawn_interval_base
        .saturating_sub((score as u64 / 50) * cfg.spawn_interval_step)
        .max(cfg.spawn_interval_min)
}

/// Pick a spawn lane whose entry region is clear, or `None` when every
/// lane is blocked. Never walls off the road: an occupied entry region
/// excludes the lane outright.
pub fn choose_spawn_lane(
    rng: &mut StdRng,
    cfg: &RacerConfig,
    obstacles: &[Obstacle],
) -> Option<usize> {
    let blocked: Vec<usize> = obstacles
        .iter()
        .filter(|o| o.y < cfg.spawn_block_y)
        .map(|o| o.lane)
        .collect();
    let open: Vec<usize> = (0..cfg.lanes).filter(|l| !blocked.contains(l)).collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn speed_scales_per_100_points() {
        let cfg = RacerConfig::default();
        assert_eq!(speed_for(&cfg, 0), 4.0);
        assert_eq!(speed_for(&cfg, 99), 4.0);
        assert_eq!(speed_for(&cfg, 100), 4.5);
        assert_eq!(speed_for(&cfg, 250), 5.0);
    }

    #[test]
    fn spawn_interval_floors_at_min() {
        let cfg = RacerConfig::default();
        assert_eq!(spawn_interval_for(&cfg, 0), 90);
        assert_eq!(spawn_interval_for(&cfg, 50), 85);
        assert_eq!(spawn_interval_for(&cfg, 500), 40);
        assert_eq!(spawn_interval_for(&cfg, 5000), 40);
    }

    #[test]
    fn spawn_avoids_blocked_lanes() {
        let cfg = RacerConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let obstacles: Vec<Obstacle> = (0..4)
            .map(|lane| Obstacle {
                lane,
                y: 10.0,
                color: 0,
            })
            .collect();
        for _ in 0..20 {
            assert_eq!(
                choose_spawn_lane(&mut rng, &cfg, &obstacles),
                Some(4),
                "Only lane 4 has a clear entry region"
            );
        }
    }

    #[test]
    fn no_spawn_when_every_lane_is_blocked() {
        let cfg = RacerConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let obstacles: Vec<Obstacle> = (0..5)
            .map(|lane| Obstacle {
                lane,
                y: 10.0,
                color: 0,
            })
            .collect();
        assert_eq!(choose_spawn_lane(&mut rng, &cfg, &obstacles), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Spawning never picks a lane whose entry region is occupied,
            // so a wall of simultaneous cars cannot form.
            #[test]
            fn spawn_lane_entry_region_is_always_clear(
                seed in 0u64..500,
                lanes in proptest::collection::vec((0usize..5, 0.0f32..520.0), 0..12),
            ) {
                let cfg = RacerConfig::default();
                let mut rng = StdRng::seed_from_u64(seed);
                let obstacles: Vec<Obstacle> = lanes
                    .into_iter()
                    .map(|(lane, y)| Obstacle { lane, y, color: 0 })
                    .collect();
                if let Some(lane) = choose_spawn_lane(&mut rng, &cfg, &obstacles) {
                    prop_assert!(lane < cfg.lanes);
                    prop_assert!(
                        !obstacles.iter().any(|o| o.lane == lane && o.y < cfg.spawn_block_y),
                        "Chosen lane {lane} has a car in its entry region"
                    );
                }
            }
        }
    }

    #[test]
    fn deep_obstacles_do_not_block_spawning() {
        let cfg = RacerConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let obstacles = vec![Obstacle {
            lane: 2,
            y: 300.0,
            color: 0,
        }];
        let mut saw_lane_2 = false;
        for _ in 0..100 {
            if choose_spawn_lane(&mut rng, &cfg, &obstacles) == Some(2) {
                saw_lane_2 = true;
                break;
            }
        }
        assert!(saw_lane_2, "A car far down the road frees its lane for spawns");
    }
}
