use arcade_core::lifecycle::Lifecycle;
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::SnakeState;
use crate::config::SnakeConfig;

const BACKGROUND: &str = "#050d1a";
const GRID_LINE: &str = "#00e5ff0a";
const HEAD: &str = "#00e5ff";
const BODY: &str = "#00b4dc";
const FOOD: &str = "#00ff88";
const HUD: &str = "#00e5ff";
const OVERLAY_TITLE: &str = "#00ff88";
const OVERLAY_TEXT: &str = "#ffffffb3";

pub(crate) fn draw(
    state: &SnakeState,
    cfg: &SnakeConfig,
    lifecycle: Lifecycle,
    score: u32,
    frame_count: u64,
    scene: &mut Scene,
) {
    let cell = cfg.cell as f32;
    let w = (cfg.cols as u32 * cfg.cell) as f32;
    let h = (cfg.rows as u32 * cfg.cell) as f32;

    scene.push(DrawCommand::Clear { color: BACKGROUND });
    for x in 0..=cfg.cols {
        let lx = x as f32 * cell;
        scene.push(DrawCommand::Line {
            x1: lx,
            y1: 0.0,
            x2: lx,
            y2: h,
            width: 1.0,
            color: GRID_LINE,
        });
    }
    for y in 0..=cfg.rows {
        let ly = y as f32 * cell;
        scene.push(DrawCommand::Line {
            x1: 0.0,
            y1: ly,
            x2: w,
            y2: ly,
            width: 1.0,
            color: GRID_LINE,
        });
    }

    // Food, pulsing with the frame counter.
    let pulse = (frame_count as f32 * 0.15).sin() * 0.3 + 0.7;
    scene.push(DrawCommand::Circle {
        x: state.food.x as f32 * cell + cell / 2.0,
        y: state.food.y as f32 * cell + cell / 2.0,
        radius: (cell / 2.0 - 3.0) * pulse.max(0.5),
        color: FOOD,
    });

    for (i, seg) in state.body.iter().enumerate() {
        let is_head = i == 0;
        let pad = if is_head { 1.0 } else { 2.0 };
        scene.push(DrawCommand::RoundRect {
            x: seg.x as f32 * cell + pad,
            y: seg.y as f32 * cell + pad,
            w: cell - pad * 2.0,
            h: cell - pad * 2.0,
            radius: if is_head { 4.0 } else { 3.0 },
            color: if is_head { HEAD } else { BODY },
        });
    }

    scene.push(DrawCommand::Text {
        x: 10.0,
        y: 20.0,
        size: 16.0,
        align: TextAlign::Left,
        color: HUD,
        text: format!("SCORE: {score}"),
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: w / 2.0,
                y: h / 2.0 - 25.0,
                size: 20.0,
                align: TextAlign::Center,
                color: OVERLAY_TITLE,
                text: "NEON SNAKE".into(),
            });
            scene.push(DrawCommand::Text {
                x: w / 2.0,
                y: h / 2.0 + 10.0,
                size: 13.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS ARROW KEYS TO START".into(),
            });
        },
        Lifecycle::Terminal(_) => {
            scene.push(DrawCommand::Text {
                x: w / 2.0,
                y: h / 2.0 - 10.0,
                size: 24.0,
                align: TextAlign::Center,
                color: "#ff0055",
                text: "GAME OVER".into(),
            });
        },
        Lifecycle::Playing => {},
    }
}
