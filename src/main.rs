//! Flex Quest entry point
//!
//! Native builds run a short headless simulation; the browser build only
//! sets up logging and settings, with the page script driving frames.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {e}").into());
    }

    let mut settings = flex_quest::Settings::load();
    if let Some(query) = web_sys::window().and_then(|w| w.location().search().ok()) {
        settings.apply_query(&query);
    }
    log::info!(
        "Flex Quest starting (quality {}, {} particles max)",
        settings.quality.as_str(),
        settings.max_particles()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flex Quest (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    if let Err(e) = demo::run() {
        log::error!("Demo level failed to load: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use flex_quest::Settings;
    use flex_quest::consts::{FRAME_MS, TILE_SIZE};
    use flex_quest::renderer::RecordingRenderer;
    use flex_quest::sim::{
        Actor, FrameClock, GameEvent, LevelError, ParticleSystem, TileGrid, TileKind, step_body,
    };
    use glam::Vec2;

    const DEMO_LEVEL: [&str; 8] = [
        "....................",
        "....................",
        "..........?B?.......",
        "....................",
        "....................",
        "...............PP...",
        "......o.o.o....PP...",
        "####################",
    ];

    /// Drop the player, walk right collecting coins, stop against the pipe
    pub fn run() -> Result<(), LevelError> {
        let settings = Settings::load();
        let mut level = TileGrid::from_rows(&DEMO_LEVEL)?;
        let mut particles = ParticleSystem::with_capacity(0xF1E5, settings.max_particles());
        let mut player = Actor::player(1, Vec2::new(TILE_SIZE * 2.0, 0.0));
        let mut clock = FrameClock::new();
        let mut renderer = RecordingRenderer::new();

        let mut time = 0.0;
        for frame in 0..240 {
            time += f64::from(FRAME_MS);
            let dt = clock.advance(time);

            if player.on_ground {
                player.vel.x = 1.5;
            }
            let falling = player.vel.y > 1.0;
            step_body(&mut player, Some(&level), &settings.physics, dt);

            if falling && player.on_ground {
                log::info!("Frame {}: landed at {:?}", frame, player.pos);
                particles.handle_event(GameEvent::PlayerLanded { pos: player.pos });
            }

            let (col, row) = TileGrid::cell_at(player.center());
            if level.get(col, row) == Some(TileKind::Coin) {
                level.set(col, row, TileKind::Empty);
                let tile = Vec2::new(col as f32, row as f32) * TILE_SIZE;
                log::info!("Frame {}: coin at ({}, {})", frame, col, row);
                particles.handle_event(GameEvent::CoinCollected { pos: tile });
            }

            particles.update(dt);
            renderer.clear();
            particles.render(&mut renderer);
        }

        log::info!(
            "Finished at {:?}, {} particles drawn on the last frame, {} fps",
            player.pos,
            renderer.drawn.len(),
            clock.fps()
        );
        Ok(())
    }
}
