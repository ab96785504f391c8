//! Per-frame simulation step
//!
//! One frame runs to completion: input → camera → update → mountain
//! recycling → collision → render. End screens only listen for restart/quit.

use super::state::{Game, GamePhase};
use crate::error::Result;
use crate::input::{Control, InputSource};
use crate::renderer::RenderSurface;
use crate::sanitize_dt;

/// Advance the game by one frame without drawing
///
/// `dt` and `elapsed` are in milliseconds. `dt` is clamped to
/// `Settings::max_frame_dt_ms`; negative or NaN deltas count as zero.
pub fn tick(game: &mut Game, input: &dyn InputSource, dt: f32, elapsed: f32) -> Result<()> {
    if !game.running {
        return Ok(());
    }
    if input.was_pressed(Control::Quit) || input.is_held(Control::Quit) {
        game.quit();
        return Ok(());
    }

    let dt = sanitize_dt(dt, game.settings.max_frame_dt_ms);

    match game.scene.phase {
        GamePhase::Playing => {
            let scene = &mut game.scene;
            scene.dispatch_input(input);
            scene.advance_camera(dt);
            scene.update_entities(dt, elapsed, input, &game.settings);
            scene.recycle_mountains(&game.settings)?;
            let next = scene.resolve_collisions(&game.settings, game.policy.as_ref())?;
            if let Some(phase) = next {
                game.transition(phase);
            }
        }
        GamePhase::GameOver | GamePhase::Victory => {
            if input.was_pressed(Control::Restart) {
                game.transition(GamePhase::Playing);
            }
        }
    }

    Ok(())
}

/// Draw the active scene
pub fn render(game: &Game, surface: &mut dyn RenderSurface) {
    game.scene.render(&game.settings, surface);
}

impl Game {
    /// Tick then render; returns whether the game is still running
    pub fn frame(
        &mut self,
        input: &dyn InputSource,
        dt: f32,
        elapsed: f32,
        surface: &mut dyn RenderSurface,
    ) -> Result<bool> {
        tick(self, input, dt, elapsed)?;
        if self.running {
            render(self, surface);
        }
        Ok(self.running)
    }
}
