use arcade_core::geometry::Vec2;

use crate::PongState;
use crate::config::PongConfig;

/// Which goal line the ball crossed this frame, from the player's point of
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalEvent {
    None,
    /// Ball out on the left: point for the CPU.
    CpuPoint,
    /// Ball out on the right: point for the player.
    PlayerPoint,
}

/// Move the player's paddle by held keys and pointer chase, clamped to the
/// field.
pub fn move_player_paddle(
    state: &mut PongState,
    cfg: &PongConfig,
    up_held: bool,
    down_held: bool,
    pointer_y: Option<f32>,
) {
    if up_held {
        state.player_y -= cfg.paddle_speed;
    }
    if down_held {
        state.player_y += cfg.paddle_speed;
    }
    if let Some(py) = pointer_y {
        let target = py - cfg.paddle_h / 2.0;
        let diff = target - state.player_y;
        if diff.abs() > 1.0 {
            state.player_y += diff.signum() * diff.abs().min(cfg.pointer_step());
        }
    }
    state.player_y = state.player_y.clamp(0.0, cfg.height - cfg.paddle_h);
}

/// CPU paddle: track the ball's center with a dead zone so it can be
/// beaten by sharp angles.
pub fn move_cpu_paddle(state: &mut PongState, cfg: &PongConfig) {
    let center = state.cpu_y + cfg.paddle_h / 2.0;
    if center < state.ball.y - cfg.cpu_deadzone {
        state.cpu_y = (state.cpu_y + cfg.cpu_speed).min(cfg.height - cfg.paddle_h);
    } else if center > state.ball.y + cfg.cpu_deadzone {
        state.cpu_y = (state.cpu_y - cfg.cpu_speed).max(0.0);
    }
}

/// Advance the ball one frame: integrate, reflect off the rails, re-aim
/// off paddles, and report goal crossings.
pub fn step_ball(state: &mut PongState, cfg: &PongConfig) -> GoalEvent {
    let r = cfg.ball_size;
    state.ball += state.ball_vel;

    if state.ball.y - r < 0.0 {
        state.ball.y = r;
        state.ball_vel.y = state.ball_vel.y.abs();
    }
    if state.ball.y + r > cfg.height {
        state.ball.y = cfg.height - r;
        state.ball_vel.y = -state.ball_vel.y.abs();
    }

    // Player paddle: contact point steers the return, each return is a
    // little faster.
    if state.ball.x - r < cfg.player_x + cfg.paddle_w
        && state.ball.x + r > cfg.player_x
        && state.ball.y > state.player_y
        && state.ball.y < state.player_y + cfg.paddle_h
    {
        state.ball.x = cfg.player_x + cfg.paddle_w + r;
        let hit_pos = (state.ball.y - state.player_y) / cfg.paddle_h - 0.5;
        let speed = state.ball_vel.length() + cfg.speed_gain_player;
        state.ball_vel = Vec2::new(
            (speed * (hit_pos * cfg.spin).cos()).abs(),
            speed * (hit_pos * cfg.spin).sin() * 2.0,
        );
    }

    let cpu_x = cfg.cpu_x();
    if state.ball.x + r > cpu_x
        && state.ball.x - r < cpu_x + cfg.paddle_w
        && state.ball.y > state.cpu_y
        && state.ball.y < state.cpu_y + cfg.paddle_h
    {
        state.ball.x = cpu_x - r;
        let hit_pos = (state.ball.y - state.cpu_y) / cfg.paddle_h - 0.5;
        let speed = state.ball_vel.length() + cfg.speed_gain_cpu;
        state.ball_vel = Vec2::new(
            -(speed * (hit_pos * cfg.spin).cos()).abs(),
            speed * (hit_pos * cfg.spin).sin() * 2.0,
        );
    }

    if state.ball.x < 0.0 {
        GoalEvent::CpuPoint
    } else if state.ball.x > cfg.width {
        GoalEvent::PlayerPoint
    } else {
        GoalEvent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_state(cfg: &PongConfig) -> PongState {
        PongState {
            player_y: cfg.height / 2.0 - cfg.paddle_h / 2.0,
            cpu_y: cfg.height / 2.0 - cfg.paddle_h / 2.0,
            ball: Vec2::new(cfg.width / 2.0, cfg.height / 2.0),
            ball_vel: Vec2::new(cfg.ball_speed_init, 2.0),
            cpu_score: 0,
        }
    }

    #[test]
    fn rails_reflect_the_ball() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.ball = Vec2::new(240.0, 12.0);
        state.ball_vel = Vec2::new(1.0, -5.0);
        assert_eq!(step_ball(&mut state, &cfg), GoalEvent::None);
        assert!(state.ball_vel.y > 0.0, "Top rail reflects downward");
        assert!(state.ball.y >= cfg.ball_size);
    }

    #[test]
    fn player_paddle_returns_with_speed_gain() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.player_y = 220.0;
        state.ball = Vec2::new(45.0, 260.0);
        state.ball_vel = Vec2::new(-4.0, 0.0);

        let before = state.ball_vel.length();
        assert_eq!(step_ball(&mut state, &cfg), GoalEvent::None);

        assert!(state.ball_vel.x > 0.0, "Return goes back toward the CPU");
        assert!(
            state.ball_vel.length() > before,
            "Each player return gains speed"
        );
        assert_eq!(state.ball.x, cfg.player_x + cfg.paddle_w + cfg.ball_size);
    }

    #[test]
    fn cpu_paddle_returns_leftward() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.cpu_y = 220.0;
        state.ball = Vec2::new(cfg.cpu_x() - 5.0, 260.0);
        state.ball_vel = Vec2::new(4.0, 0.0);

        assert_eq!(step_ball(&mut state, &cfg), GoalEvent::None);
        assert!(state.ball_vel.x < 0.0);
        assert_eq!(state.ball.x, cfg.cpu_x() - cfg.ball_size);
    }

    #[test]
    fn edge_contact_steers_sharply() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.player_y = 220.0;
        // Contact near the bottom edge of the paddle.
        state.ball = Vec2::new(45.0, 295.0);
        state.ball_vel = Vec2::new(-4.0, 0.0);

        step_ball(&mut state, &cfg);
        assert!(
            state.ball_vel.y > 1.0,
            "Bottom-edge contact must angle the return down, got {}",
            state.ball_vel.y
        );
    }

    #[test]
    fn goals_are_reported() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.ball = Vec2::new(1.0, 400.0); // out of paddle reach
        state.ball_vel = Vec2::new(-3.0, 0.0);
        assert_eq!(step_ball(&mut state, &cfg), GoalEvent::CpuPoint);

        let mut state = centered_state(&cfg);
        state.ball = Vec2::new(479.0, 100.0);
        state.ball_vel = Vec2::new(3.0, 0.0);
        assert_eq!(step_ball(&mut state, &cfg), GoalEvent::PlayerPoint);
    }

    #[test]
    fn cpu_tracks_ball_outside_deadzone() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.ball.y = 400.0;
        let before = state.cpu_y;
        move_cpu_paddle(&mut state, &cfg);
        assert_eq!(state.cpu_y, before + cfg.cpu_speed);
    }

    #[test]
    fn cpu_holds_inside_deadzone() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        state.ball.y = state.cpu_y + cfg.paddle_h / 2.0 + 3.0;
        let before = state.cpu_y;
        move_cpu_paddle(&mut state, &cfg);
        assert_eq!(state.cpu_y, before, "Small offsets sit in the dead zone");
    }

    #[test]
    fn player_paddle_clamps_to_field() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        for _ in 0..200 {
            move_player_paddle(&mut state, &cfg, true, false, None);
        }
        assert_eq!(state.player_y, 0.0);
    }

    #[test]
    fn pointer_chase_is_rate_limited() {
        let cfg = PongConfig::default();
        let mut state = centered_state(&cfg);
        let before = state.player_y;
        move_player_paddle(&mut state, &cfg, false, false, Some(500.0));
        assert_eq!(state.player_y, before + cfg.pointer_step());
    }
}
