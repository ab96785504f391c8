//! Wire Plane entry point
//!
//! Headless driver: runs a scripted flight at a fixed 60 Hz against a vertex
//! surface and logs what happens. A windowed frontend feeds real key state
//! into the same `Game::frame` call.

use wire_plane::renderer::VertexSurface;
use wire_plane::sim::{Game, GamePhase};
use wire_plane::{Control, FrameInput, Settings};

const FRAME_MS: f32 = 1000.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 60;

/// Pilot input for a given frame: weave up and down, speed up now and then
fn scripted_input(frame: u32, phase: GamePhase) -> FrameInput {
    let input = FrameInput::new();
    if phase != GamePhase::Playing {
        // Linger on the end screen for a second before restarting
        return if frame % 60 == 0 {
            input.press(Control::Restart)
        } else {
            input
        };
    }
    match (frame / 90) % 4 {
        0 => input.hold(Control::Up),
        1 => input.hold(Control::Right),
        2 => input.hold(Control::Down),
        _ if frame % 45 == 0 => input.press(Control::NudgeUp),
        _ => input,
    }
}

fn main() {
    env_logger::init();
    log::info!("Wire Plane (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wire-plane.json".to_owned());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Could not read {}: {}; using defaults", path, e);
            Settings::default()
        }
    };
    log::info!("Collision policy: {}", settings.collision_policy.as_str());

    let mut game = Game::new(settings);
    let mut surface = VertexSurface::new();
    let mut last_phase = game.phase();
    let mut elapsed = 0.0;

    for frame in 0..MAX_FRAMES {
        let input = if frame + 1 == MAX_FRAMES {
            FrameInput::new().press(Control::Quit)
        } else {
            scripted_input(frame, game.phase())
        };

        surface.clear();
        elapsed += FRAME_MS;
        match game.frame(&input, FRAME_MS, elapsed, &mut surface) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                log::error!("Frame {} failed: {}", frame, e);
                if cfg!(debug_assertions) && e.is_geometry() {
                    panic!("geometry error in frame {frame}: {e}");
                }
                break;
            }
        }

        if game.phase() != last_phase {
            log::info!("Frame {}: now {:?}", frame, game.phase());
            last_phase = game.phase();
        }
        if frame % 600 == 0 {
            log::info!(
                "Frame {}: distance {:.0}, {} vertices ({} bytes), {} labels",
                frame,
                game.scene.distance(),
                surface.vertices.len(),
                surface.vertex_bytes().len(),
                surface.texts.len()
            );
        }
    }

    log::info!("Wire Plane stopped");
}
