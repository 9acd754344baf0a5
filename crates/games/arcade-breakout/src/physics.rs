use rand::Rng;
use rand::rngs::StdRng;

use arcade_core::geometry::{Aabb, Axis, Vec2, bounce_axis};

use crate::BreakoutState;
use crate::config::BreakoutConfig;

/// What a single ball step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    None,
    /// Index of the brick destroyed this frame.
    BrickDestroyed(usize),
    /// Ball left the bottom edge.
    BallLost,
}

/// Re-attach the ball to the paddle for a (re)serve.
pub fn attach_ball(state: &mut BreakoutState, cfg: &BreakoutConfig, rng: &mut StdRng) {
    state.ball = Vec2::new(
        state.paddle_x + cfg.paddle_w / 2.0,
        cfg.paddle_y() - cfg.ball_radius - 2.0,
    );
    let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
    state.ball_vel = Vec2::new(cfg.launch_vx * sign, cfg.launch_vy);
    state.ball_attached = true;
}

/// Move the paddle toward the pointer (bounded step) and by held arrows,
/// clamped to the playfield.
pub fn move_paddle(
    state: &mut BreakoutState,
    cfg: &BreakoutConfig,
    pointer_x: Option<f32>,
    left_held: bool,
    right_held: bool,
) {
    if let Some(px) = pointer_x {
        let target = px - cfg.paddle_w / 2.0;
        let diff = target - state.paddle_x;
        state.paddle_x += diff.signum() * diff.abs().min(cfg.paddle_pointer_step);
    }
    if left_held {
        state.paddle_x -= cfg.paddle_key_speed;
    }
    if right_held {
        state.paddle_x += cfg.paddle_key_speed;
    }
    state.paddle_x = state.paddle_x.clamp(0.0, cfg.width - cfg.paddle_w);
}

/// Resolution axis for a ball overlapping a brick: minimum penetration
/// depth, except that a deeply embedded ball (center inside the brick)
/// always resolves vertically. The embedded fallback keeps the step total
/// for degenerate overlaps; min-penetration ties also resolve vertically.
pub fn brick_bounce_axis(ball: Vec2, radius: f32, brick: &Aabb) -> Axis {
    if brick.contains(ball) {
        return Axis::Vertical;
    }
    let ball_box = Aabb::centered(ball, radius, radius);
    bounce_axis(&ball_box, brick)
}

/// Advance the free ball one frame: integrate, reflect off walls and
/// paddle, resolve at most one brick, detect loss.
pub fn step_ball(state: &mut BreakoutState, cfg: &BreakoutConfig) -> BallEvent {
    let r = cfg.ball_radius;
    state.ball += state.ball_vel;

    // Wall reflection, with push-out so an edge-straddling ball cannot
    // oscillate between in and out of bounds.
    if state.ball.x - r < 0.0 {
        state.ball.x = r;
        state.ball_vel.x = state.ball_vel.x.abs();
    }
    if state.ball.x + r > cfg.width {
        state.ball.x = cfg.width - r;
        state.ball_vel.x = -state.ball_vel.x.abs();
    }
    if state.ball.y - r < 0.0 {
        state.ball.y = r;
        state.ball_vel.y = state.ball_vel.y.abs();
    }

    // Paddle.
    let paddle_y = cfg.paddle_y();
    if state.ball.y + r >= paddle_y
        && state.ball.y - r <= paddle_y + cfg.paddle_h
        && state.ball.x >= state.paddle_x
        && state.ball.x <= state.paddle_x + cfg.paddle_w
    {
        state.ball.y = paddle_y - r;
        let hit_pos = (state.ball.x - state.paddle_x) / cfg.paddle_w - 0.5;
        let speed = state.ball_vel.length();
        state.ball_vel.x = speed * hit_pos * cfg.spin;
        state.ball_vel.y = -state.ball_vel.y.abs();
    }

    // First overlapping live brick resolves this frame.
    let ball_box = Aabb::centered(state.ball, r, r);
    for (i, brick) in state.bricks.iter_mut().enumerate() {
        if !brick.alive || !ball_box.intersects(&brick.rect) {
            continue;
        }
        brick.alive = false;
        match brick_bounce_axis(state.ball, r, &brick.rect) {
            Axis::Vertical => state.ball_vel.y = -state.ball_vel.y,
            Axis::Horizontal => state.ball_vel.x = -state.ball_vel.x,
        }
        return BallEvent::BrickDestroyed(i);
    }

    if state.ball.y - r > cfg.height {
        return BallEvent::BallLost;
    }
    BallEvent::None
}
