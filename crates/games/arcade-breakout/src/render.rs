use arcade_core::lifecycle::{Lifecycle, Outcome};
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::BreakoutState;
use crate::config::BreakoutConfig;

const BACKGROUND: &str = "#050d1a";
const PADDLE: &str = "#00e5ff";
const BALL: &str = "#ffcc00";
const HUD_SCORE: &str = "#ffcc00";
const HUD_LIVES: &str = "#ff0055";
const OVERLAY_TEXT: &str = "#ffffffb3";

/// Row colors cycle through the neon palette, top row first.
pub const BRICK_COLORS: [&str; 6] = [
    "#ff0055", "#ff4400", "#ff8800", "#ffcc00", "#00ff88", "#00e5ff",
];

pub(crate) fn draw(
    state: &BreakoutState,
    cfg: &BreakoutConfig,
    lifecycle: Lifecycle,
    score: u32,
    lives: u32,
    scene: &mut Scene,
) {
    scene.push(DrawCommand::Clear { color: BACKGROUND });

    for brick in state.bricks.iter().filter(|b| b.alive) {
        scene.push(DrawCommand::Rect {
            x: brick.rect.x,
            y: brick.rect.y,
            w: brick.rect.w,
            h: brick.rect.h,
            color: BRICK_COLORS[brick.row % BRICK_COLORS.len()],
        });
    }

    scene.push(DrawCommand::RoundRect {
        x: state.paddle_x,
        y: cfg.paddle_y(),
        w: cfg.paddle_w,
        h: cfg.paddle_h,
        radius: 6.0,
        color: PADDLE,
    });

    scene.push(DrawCommand::Circle {
        x: state.ball.x,
        y: state.ball.y,
        radius: cfg.ball_radius,
        color: BALL,
    });

    scene.push(DrawCommand::Text {
        x: 10.0,
        y: 30.0,
        size: 14.0,
        align: TextAlign::Left,
        color: HUD_SCORE,
        text: format!("SCORE: {score}"),
    });
    scene.push(DrawCommand::Text {
        x: cfg.width - 10.0,
        y: 30.0,
        size: 14.0,
        align: TextAlign::Right,
        color: HUD_LIVES,
        text: format!("LIVES: {lives}"),
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 22.0,
                align: TextAlign::Center,
                color: HUD_SCORE,
                text: "NEON BREAKOUT".into(),
            });
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 + 10.0,
                size: 14.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS SPACE / CLICK TO START".into(),
            });
        },
        Lifecycle::Terminal(Outcome::Won) => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 26.0,
                align: TextAlign::Center,
                color: "#00ff88",
                text: "YOU WIN!".into(),
            });
        },
        Lifecycle::Terminal(Outcome::Dead) => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 26.0,
                align: TextAlign::Center,
                color: "#ff0055",
                text: "GAME OVER".into(),
            });
        },
        Lifecycle::Playing => {},
    }
}
