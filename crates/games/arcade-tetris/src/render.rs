use arcade_core::lifecycle::Lifecycle;
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::TetrisState;
use crate::config::TetrisConfig;

const BACKGROUND: &str = "#050d1a";
const GRID_LINE: &str = "#00e5ff0d";
const WELL_BORDER: &str = "#00e5ff4d";
const OVERLAY_TITLE: &str = "#aa00ff";
const OVERLAY_TEXT: &str = "#ffffffb3";

pub(crate) fn draw(
    state: &TetrisState,
    cfg: &TetrisConfig,
    lifecycle: Lifecycle,
    ghost_offset: i32,
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

    // Settled cells.
    for y in 0..cfg.rows {
        for x in 0..cfg.cols {
            if let Some(kind) = state.board.get(x, y) {
                scene.push(DrawCommand::Rect {
                    x: x as f32 * cell + 1.0,
                    y: y as f32 * cell + 1.0,
                    w: cell - 2.0,
                    h: cell - 2.0,
                    color: kind.color(),
                });
            }
        }
    }

    if lifecycle == Lifecycle::Playing {
        // Ghost piece at the drop target, then the active piece on top.
        for (x, y) in state.piece.cells_at(0, ghost_offset) {
            if y >= 0 {
                scene.push(DrawCommand::Rect {
                    x: x as f32 * cell + 1.0,
                    y: y as f32 * cell + 1.0,
                    w: cell - 2.0,
                    h: cell - 2.0,
                    color: "#ffffff22",
                });
            }
        }
        for (x, y) in state.piece.cells_at(0, 0) {
            if y >= 0 {
                scene.push(DrawCommand::Rect {
                    x: x as f32 * cell + 1.0,
                    y: y as f32 * cell + 1.0,
                    w: cell - 2.0,
                    h: cell - 2.0,
                    color: state.piece.kind.color(),
                });
            }
        }
    }

    scene.push(DrawCommand::Line {
        x1: 1.0,
        y1: 1.0,
        x2: w - 1.0,
        y2: 1.0,
        width: 2.0,
        color: WELL_BORDER,
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: w / 2.0,
                y: h / 2.0 - 30.0,
                size: 22.0,
                align: TextAlign::Center,
                color: OVERLAY_TITLE,
                text: "NEON BLOCKS".into(),
            });
            scene.push(DrawCommand::Text {
                x: w / 2.0,
                y: h / 2.0 + 10.0,
                size: 13.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS ANY KEY TO START".into(),
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
