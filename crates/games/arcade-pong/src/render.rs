use arcade_core::lifecycle::{Lifecycle, Outcome};
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::PongState;
use crate::config::PongConfig;

const BACKGROUND: &str = "#050d1a";
const CENTER_LINE: &str = "#ff00ff40";
const PLAYER_PADDLE: &str = "#00e5ff";
const CPU_PADDLE: &str = "#ff00aa";
const BALL: &str = "#ff00ff";
const OVERLAY_TEXT: &str = "#ffffffb3";

pub(crate) fn draw(
    state: &PongState,
    cfg: &PongConfig,
    lifecycle: Lifecycle,
    player_score: u32,
    scene: &mut Scene,
) {
    scene.push(DrawCommand::Clear { color: BACKGROUND });

    scene.push(DrawCommand::Line {
        x1: cfg.width / 2.0,
        y1: 0.0,
        x2: cfg.width / 2.0,
        y2: cfg.height,
        width: 2.0,
        color: CENTER_LINE,
    });

    scene.push(DrawCommand::RoundRect {
        x: cfg.player_x,
        y: state.player_y,
        w: cfg.paddle_w,
        h: cfg.paddle_h,
        radius: 4.0,
        color: PLAYER_PADDLE,
    });
    scene.push(DrawCommand::RoundRect {
        x: cfg.cpu_x(),
        y: state.cpu_y,
        w: cfg.paddle_w,
        h: cfg.paddle_h,
        radius: 4.0,
        color: CPU_PADDLE,
    });
    scene.push(DrawCommand::Circle {
        x: state.ball.x,
        y: state.ball.y,
        radius: cfg.ball_size,
        color: BALL,
    });

    scene.push(DrawCommand::Text {
        x: cfg.width / 4.0,
        y: 50.0,
        size: 36.0,
        align: TextAlign::Center,
        color: PLAYER_PADDLE,
        text: player_score.to_string(),
    });
    scene.push(DrawCommand::Text {
        x: cfg.width * 3.0 / 4.0,
        y: 50.0,
        size: 36.0,
        align: TextAlign::Center,
        color: CPU_PADDLE,
        text: state.cpu_score.to_string(),
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 24.0,
                align: TextAlign::Center,
                color: BALL,
                text: "NEON PONG".into(),
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
        Lifecycle::Terminal(outcome) => {
            let (text, color) = match outcome {
                Outcome::Won => ("YOU WIN!", "#00ff88"),
                Outcome::Dead => ("CPU WINS!", "#ff0055"),
            };
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 26.0,
                align: TextAlign::Center,
                color,
                text: text.into(),
            });
        },
        Lifecycle::Playing => {},
    }
}
