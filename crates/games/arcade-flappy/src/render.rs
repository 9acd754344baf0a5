use arcade_core::lifecycle::Lifecycle;
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::FlappyState;
use crate::config::FlappyConfig;

const BACKGROUND: &str = "#050d1a";
const BIRD: &str = "#00e5ff";
const BEAK: &str = "#ffcc00";
const PIPE: &str = "#00aa44";
const PIPE_CAP: &str = "#00cc55";
const GROUND: &str = "#00e5ff4d";
const HUD: &str = "#00e5ff";
const OVERLAY_TEXT: &str = "#ffffffb3";

pub(crate) fn draw(
    state: &FlappyState,
    cfg: &FlappyConfig,
    lifecycle: Lifecycle,
    score: u32,
    scene: &mut Scene,
) {
    scene.push(DrawCommand::Clear { color: BACKGROUND });

    for pipe in &state.pipes {
        let bot_y = pipe.top_height + cfg.pipe_gap;
        scene.push(DrawCommand::Rect {
            x: pipe.x,
            y: 0.0,
            w: cfg.pipe_width,
            h: pipe.top_height,
            color: PIPE,
        });
        scene.push(DrawCommand::Rect {
            x: pipe.x - 4.0,
            y: pipe.top_height - 20.0,
            w: cfg.pipe_width + 8.0,
            h: 20.0,
            color: PIPE_CAP,
        });
        scene.push(DrawCommand::Rect {
            x: pipe.x,
            y: bot_y,
            w: cfg.pipe_width,
            h: cfg.height - bot_y,
            color: PIPE,
        });
        scene.push(DrawCommand::Rect {
            x: pipe.x - 4.0,
            y: bot_y,
            w: cfg.pipe_width + 8.0,
            h: 20.0,
            color: PIPE_CAP,
        });
    }

    scene.push(DrawCommand::Line {
        x1: 0.0,
        y1: cfg.height - 2.0,
        x2: cfg.width,
        y2: cfg.height - 2.0,
        width: 2.0,
        color: GROUND,
    });

    scene.push(DrawCommand::Circle {
        x: cfg.bird_x,
        y: state.bird_y,
        radius: cfg.bird_size / 2.0,
        color: BIRD,
    });
    // Beak hints at the rotation without a full sprite transform.
    scene.push(DrawCommand::Circle {
        x: cfg.bird_x + cfg.bird_size / 2.0 * (1.0 - state.bird_rot.abs() * 0.3),
        y: state.bird_y + state.bird_rot * 6.0,
        radius: 4.0,
        color: BEAK,
    });

    scene.push(DrawCommand::Text {
        x: cfg.width / 2.0,
        y: 50.0,
        size: 28.0,
        align: TextAlign::Center,
        color: HUD,
        text: score.to_string(),
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 22.0,
                align: TextAlign::Center,
                color: HUD,
                text: "NEON FLAPPY".into(),
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
        Lifecycle::Terminal(_) => {
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
