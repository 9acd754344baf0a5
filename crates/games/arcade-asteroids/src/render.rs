use arcade_core::geometry::Vec2;
use arcade_core::lifecycle::Lifecycle;
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::AsteroidsState;
use crate::config::AsteroidsConfig;

const BACKGROUND: &str = "#050d1a";
const SHIP: &str = "#00e5ff";
const THRUST_FLAME: &str = "#ff8800";
const ASTEROID: &str = "#ff8800";
const BULLET: &str = "#00ff88";
const HUD_SCORE: &str = "#00e5ff";
const HUD_LIVES: &str = "#ff0055";
const OVERLAY_TEXT: &str = "#ffffffb3";

pub(crate) fn draw(
    state: &AsteroidsState,
    cfg: &AsteroidsConfig,
    lifecycle: Lifecycle,
    score: u32,
    lives: u32,
    frame_count: u64,
    scene: &mut Scene,
) {
    scene.push(DrawCommand::Clear { color: BACKGROUND });

    for a in &state.asteroids {
        let (sin, cos) = a.angle.sin_cos();
        let points = a
            .vertices
            .iter()
            .map(|v| Vec2::new(a.pos.x + v.x * cos - v.y * sin, a.pos.y + v.x * sin + v.y * cos))
            .collect();
        scene.push(DrawCommand::Polyline {
            points,
            closed: true,
            color: ASTEROID,
        });
    }

    for b in &state.bullets {
        scene.push(DrawCommand::Circle {
            x: b.pos.x,
            y: b.pos.y,
            radius: 3.0,
            color: BULLET,
        });
    }

    if lifecycle == Lifecycle::Playing {
        // Invincible ships blink at a 6-frame cadence.
        let visible = state.invincible == 0 || (frame_count / 6) % 2 == 0;
        if visible {
            let ship = &state.ship;
            let (sin, cos) = ship.angle.sin_cos();
            let local = [
                Vec2::new(18.0, 0.0),
                Vec2::new(-12.0, -10.0),
                Vec2::new(-6.0, 0.0),
                Vec2::new(-12.0, 10.0),
            ];
            let points = local
                .iter()
                .map(|v| {
                    Vec2::new(
                        ship.pos.x + v.x * cos - v.y * sin,
                        ship.pos.y + v.x * sin + v.y * cos,
                    )
                })
                .collect();
            scene.push(DrawCommand::Polyline {
                points,
                closed: true,
                color: SHIP,
            });
            if ship.thrusting {
                scene.push(DrawCommand::Polyline {
                    points: vec![
                        Vec2::new(ship.pos.x - 6.0 * cos + 5.0 * sin, ship.pos.y - 6.0 * sin - 5.0 * cos),
                        Vec2::new(ship.pos.x - 20.0 * cos, ship.pos.y - 20.0 * sin),
                        Vec2::new(ship.pos.x - 6.0 * cos - 5.0 * sin, ship.pos.y - 6.0 * sin + 5.0 * cos),
                    ],
                    closed: false,
                    color: THRUST_FLAME,
                });
            }
        }
    }

    scene.push(DrawCommand::Text {
        x: 10.0,
        y: 25.0,
        size: 14.0,
        align: TextAlign::Left,
        color: HUD_SCORE,
        text: format!("SCORE: {score}"),
    });
    scene.push(DrawCommand::Text {
        x: cfg.width - 10.0,
        y: 25.0,
        size: 14.0,
        align: TextAlign::Right,
        color: HUD_LIVES,
        text: format!("LIVES: {lives}"),
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 40.0,
                size: 20.0,
                align: TextAlign::Center,
                color: ASTEROID,
                text: "NEON ASTEROIDS".into(),
            });
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0,
                size: 13.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS SPACE TO START".into(),
            });
        },
        Lifecycle::Terminal(_) => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 26.0,
                align: TextAlign::Center,
                color: HUD_LIVES,
                text: "GAME OVER".into(),
            });
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 + 15.0,
                size: 14.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS SPACE TO RESTART".into(),
            });
        },
        Lifecycle::Playing => {},
    }
}
