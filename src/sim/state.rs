//! Top-level game state and scene transitions

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::policy::CollisionPolicy;
use super::scene::Scene;
use crate::settings::Settings;

/// Which scene is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Flying
    Playing,
    /// Crashed into a mountain
    GameOver,
    /// Landed on the ground
    Victory,
}

impl GamePhase {
    /// Rank used when one frame's contacts ask for different outcomes
    ///
    /// A crash outranks a landing, so touching a mountain and the ground at
    /// once is always a loss.
    pub fn precedence(self) -> u8 {
        match self {
            GamePhase::Playing => 0,
            GamePhase::Victory => 1,
            GamePhase::GameOver => 2,
        }
    }
}

/// Complete game state
#[derive(Debug)]
pub struct Game {
    pub settings: Settings,
    pub scene: Scene,
    /// False once quit was requested
    pub running: bool,
    pub(crate) policy: Box<dyn CollisionPolicy>,
    /// Seeds each new scene
    rng: Pcg32,
}

impl Game {
    /// Create a game in the Playing state using the settings' policy preset
    pub fn new(settings: Settings) -> Self {
        let policy = settings.collision_policy.build();
        Self::with_policy(settings, policy)
    }

    /// Create a game with an explicit collision policy
    pub fn with_policy(settings: Settings, policy: Box<dyn CollisionPolicy>) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut scene = Scene::new(GamePhase::Playing, rng.next_u64());
        scene.activate(&settings, 0.0);

        Self {
            settings,
            scene,
            running: true,
            policy,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.scene.phase
    }

    /// Discard the current scene and activate a fresh one
    pub fn transition(&mut self, phase: GamePhase) {
        let distance = self.scene.distance();
        log::info!(
            "Scene transition {:?} -> {:?} (distance {:.0})",
            self.scene.phase,
            phase,
            distance
        );
        let mut scene = Scene::new(phase, self.rng.next_u64());
        scene.activate(&self.settings, distance);
        self.scene = scene;
    }

    pub fn quit(&mut self) {
        log::info!("Quit requested");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PolicyPreset;

    #[test]
    fn test_phase_precedence() {
        assert!(GamePhase::GameOver.precedence() > GamePhase::Victory.precedence());
        assert!(GamePhase::Victory.precedence() > GamePhase::Playing.precedence());
    }

    #[test]
    fn test_new_game_starts_playing() {
        let game = Game::new(Settings {
            seed: Some(5),
            ..Default::default()
        });
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.running);
        assert!(game.scene.hero().is_some());
    }

    #[test]
    fn test_transition_replaces_scene() {
        let mut game = Game::new(Settings {
            seed: Some(5),
            ..Default::default()
        });
        game.scene.camera.x = 777.0;
        game.transition(GamePhase::Victory);
        assert_eq!(game.phase(), GamePhase::Victory);
        assert!(game.scene.hero().is_none());
        assert_eq!(game.scene.camera.x, 0.0);
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let settings = Settings {
            seed: Some(99),
            collision_policy: PolicyPreset::CorrectOnly,
            ..Default::default()
        };
        let a = Game::new(settings.clone());
        let b = Game::new(settings);
        let heights = |g: &Game| -> Vec<f32> {
            g.scene
                .entities()
                .filter_map(|e| match &e.kind {
                    crate::sim::EntityKind::Mountain(m) => Some(m.height),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(heights(&a), heights(&b));
    }
}
