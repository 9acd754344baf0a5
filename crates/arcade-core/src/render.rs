use serde::Serialize;

use crate::geometry::Vec2;

/// Hex color string from a game's fixed palette.
pub type Color = &'static str;

/// Text anchoring relative to the given x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A single drawing primitive emitted against the raster surface.
///
/// The host rasterizes these; games only describe what the current state
/// looks like. Coordinates are logical canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    RoundRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    },
    Polyline {
        points: Vec<Vec2>,
        closed: bool,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
        color: Color,
        text: String,
    },
}

/// One frame's worth of draw commands for a fixed-size logical canvas.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
