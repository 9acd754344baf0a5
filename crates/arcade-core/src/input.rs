use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Keyboard/pointer input state scoped to one game instance.
///
/// Constructed when the instance mounts and dropped with it, so key-held
/// state can never leak between instances. Directional held-keys are
/// level-triggered (`is_down`, re-read every frame); discrete actions are
/// edge-triggered (`just_pressed`, cleared by `end_frame`).
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down (by DOM-style key code, e.g. "ArrowLeft").
    keys_down: HashSet<String>,
    /// Keys pressed this frame (cleared each frame).
    keys_just_pressed: HashSet<String>,
    /// Keys released this frame (cleared each frame).
    keys_just_released: HashSet<String>,
    /// Cursor position in logical canvas pixels.
    cursor: Vec2,
    /// Whether any pointer event has arrived yet. Pointer-follow controls
    /// stay inert until the pointer actually moves.
    pointer_active: bool,
    /// Click position this frame, if any (cleared each frame).
    click: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down event. Auto-repeat while held does not re-arm
    /// the edge trigger.
    pub fn on_key_down(&mut self, code: String) {
        if self.keys_down.insert(code.clone()) {
            self.keys_just_pressed.insert(code);
        }
    }

    pub fn on_key_up(&mut self, code: String) {
        self.keys_down.remove(&code);
        self.keys_just_released.insert(code);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        self.pointer_active = true;
    }

    pub fn on_click(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
        self.pointer_active = true;
        self.click = Some(Vec2::new(x, y));
    }

    /// Whether a key is currently held (level trigger).
    pub fn is_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    /// Whether a key went down this frame (edge trigger).
    pub fn just_pressed(&self, code: &str) -> bool {
        self.keys_just_pressed.contains(code)
    }

    /// Whether any key went down this frame.
    pub fn any_just_pressed(&self) -> bool {
        !self.keys_just_pressed.is_empty()
    }

    pub fn just_released(&self, code: &str) -> bool {
        self.keys_just_released.contains(code)
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether any pointer event has arrived since mount.
    pub fn pointer_active(&self) -> bool {
        self.pointer_active
    }

    /// The click received this frame, if any.
    pub fn click(&self) -> Option<Vec2> {
        self.click
    }

    /// Clear per-frame edge state. Called by the driver after each frame.
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.click = None;
    }
}

/// Frame-counted debounce for edge-triggered intents.
///
/// A single key-down cannot fire twice within one cooldown window: the
/// action arms the cooldown and the game counts it down once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn ready(&self) -> bool {
        self.remaining == 0
    }

    pub fn arm(&mut self, frames: u32) {
        self.remaining = frames;
    }

    /// Advance one frame toward ready.
    pub fn count_down(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }
}
