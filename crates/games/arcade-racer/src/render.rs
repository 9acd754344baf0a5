use arcade_core::lifecycle::Lifecycle;
use arcade_core::render::{DrawCommand, Scene, TextAlign};

use crate::RacerState;
use crate::config::RacerConfig;

const ROAD: &str = "#0a1020";
const LANE_LINE: &str = "#ffffff26";
const EDGE: &str = "#00e5ff80";
const PLAYER: &str = "#00e5ff";
const HUD_DIST: &str = "#00e5ff";
const HUD_SPEED: &str = "#ff8800";
const OVERLAY_TEXT: &str = "#ffffffb3";

/// Obstacle paint jobs, indexed by `Obstacle::color`.
pub const OBSTACLE_COLORS: [&str; 5] = [
    "#ff0055", "#ff8800", "#aa00ff", "#ff00aa", "#00aaff",
];

pub(crate) fn draw(
    state: &RacerState,
    cfg: &RacerConfig,
    lifecycle: Lifecycle,
    score: u32,
    scene: &mut Scene,
) {
    scene.push(DrawCommand::Clear { color: ROAD });

    for lane in 1..cfg.lanes {
        let lx = lane as f32 * cfg.lane_w();
        scene.push(DrawCommand::Line {
            x1: lx,
            y1: 0.0,
            x2: lx,
            y2: cfg.height,
            width: 1.5,
            color: LANE_LINE,
        });
    }
    for edge_x in [2.0, cfg.width - 2.0] {
        scene.push(DrawCommand::Line {
            x1: edge_x,
            y1: 0.0,
            x2: edge_x,
            y2: cfg.height,
            width: 3.0,
            color: EDGE,
        });
    }

    for obs in &state.obstacles {
        scene.push(DrawCommand::RoundRect {
            x: cfg.lane_x(obs.lane, cfg.obstacle_w),
            y: obs.y,
            w: cfg.obstacle_w,
            h: cfg.obstacle_h,
            radius: 4.0,
            color: OBSTACLE_COLORS[obs.color % OBSTACLE_COLORS.len()],
        });
    }

    scene.push(DrawCommand::RoundRect {
        x: state.player_anim_x,
        y: cfg.player_y(),
        w: cfg.player_w,
        h: cfg.player_h,
        radius: 4.0,
        color: PLAYER,
    });

    scene.push(DrawCommand::Text {
        x: 10.0,
        y: 25.0,
        size: 14.0,
        align: TextAlign::Left,
        color: HUD_DIST,
        text: format!("DIST: {score}m"),
    });
    scene.push(DrawCommand::Text {
        x: cfg.width - 10.0,
        y: 25.0,
        size: 14.0,
        align: TextAlign::Right,
        color: HUD_SPEED,
        text: format!("SPEED: {:.0}km/h", state.speed * 25.0),
    });

    match lifecycle {
        Lifecycle::Idle => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 22.0,
                align: TextAlign::Center,
                color: PLAYER,
                text: "NEON RACER".into(),
            });
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 + 10.0,
                size: 14.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS ANY KEY / CLICK TO START".into(),
            });
        },
        Lifecycle::Terminal(_) => {
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 - 30.0,
                size: 26.0,
                align: TextAlign::Center,
                color: "#ff0055",
                text: "CRASHED!".into(),
            });
            scene.push(DrawCommand::Text {
                x: cfg.width / 2.0,
                y: cfg.height / 2.0 + 15.0,
                size: 14.0,
                align: TextAlign::Center,
                color: OVERLAY_TEXT,
                text: "PRESS ANY KEY / CLICK TO RESTART".into(),
            });
        },
        Lifecycle::Playing => {},
    }
}
