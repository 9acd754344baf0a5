use std::time::Duration;

use tracing_subscriber::EnvFilter;

use arcade_core::driver::InputEvent;
use arcade_core::registry::GameId;
use arcade_hub::catalog::GameCatalog;
use arcade_hub::prefs::MemoryStore;
use arcade_hub::session::ArcadeSession;

/// Headless demo: mount a game, feed it a scripted start plus periodic
/// action presses, and report the outcome.
///
/// Usage: `arcade-hub [game-id] [frames]` (defaults: flappy, 600).
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let game_id = GameId::new(args.next().unwrap_or_else(|| "flappy".to_string()));
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    let catalog = GameCatalog::new();
    let Some(game) = catalog.create(&game_id) else {
        eprintln!("Unknown game '{game_id}'. Available:");
        for entry in catalog.entries() {
            eprintln!("  {:<10} {}", entry.id, entry.metadata.name);
        }
        std::process::exit(2);
    };

    let meta = game.metadata();
    tracing::info!(game = %meta.name, frames, "Starting headless session");

    let mut session = ArcadeSession::new(game, Box::new(MemoryStore::new()));

    // Start intents for every game in the catalog: Space covers most,
    // an arrow press covers snake/tetris/racer.
    session.handle_event(InputEvent::KeyDown("Space".into()));
    session.handle_event(InputEvent::KeyUp("Space".into()));
    session.handle_event(InputEvent::KeyDown("ArrowRight".into()));
    session.handle_event(InputEvent::KeyUp("ArrowRight".into()));

    let dt = Duration::from_millis(16);
    for i in 0..frames {
        // Periodic action keeps flappy aloft and asteroids firing.
        if i % 37 == 0 {
            session.handle_event(InputEvent::KeyDown("Space".into()));
        } else if i % 37 == 2 {
            session.handle_event(InputEvent::KeyUp("Space".into()));
        }
        session.on_frame(dt);
        if session.hud().lifecycle.is_terminal() {
            break;
        }
    }

    let hud = session.hud();
    let scene = session.render();
    tracing::info!(
        lifecycle = ?hud.lifecycle,
        score = hud.score,
        lives = hud.lives,
        best = hud.best_score,
        coins = session.store().get_currency(),
        draw_commands = scene.commands().len(),
        "Session finished"
    );
    println!(
        "{}: {:?}, score {}, best {}, {} coins",
        meta.name,
        hud.lifecycle,
        hud.score,
        hud.best_score,
        session.store().get_currency()
    );
}
