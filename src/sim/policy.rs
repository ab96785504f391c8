//! Collision response policies
//!
//! The hero is always pushed back onto whatever terrain it hits. Whether that
//! contact also ends the run is up to the policy the game was configured with.

use super::state::GamePhase;

/// What the hero ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Ground,
    Mountain,
    Cloud,
}

/// Policy verdict for one contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResponse {
    /// Reposition the hero onto the contacted surface
    pub correct: bool,
    /// Leave the play scene for this phase
    pub transition: Option<GamePhase>,
}

impl CollisionResponse {
    pub const IGNORE: Self = Self {
        correct: false,
        transition: None,
    };
    pub const CORRECT: Self = Self {
        correct: true,
        transition: None,
    };

    pub fn correct_and(phase: GamePhase) -> Self {
        Self {
            correct: true,
            transition: Some(phase),
        }
    }
}

pub trait CollisionPolicy: std::fmt::Debug {
    fn respond(&self, contact: ContactKind) -> CollisionResponse;
}

/// Keep flying: terrain only corrects the hero's altitude
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectOnly;

impl CollisionPolicy for CorrectOnly {
    fn respond(&self, contact: ContactKind) -> CollisionResponse {
        match contact {
            ContactKind::Ground | ContactKind::Mountain => CollisionResponse::CORRECT,
            ContactKind::Cloud => CollisionResponse::IGNORE,
        }
    }
}

/// Landing on the ground wins, hitting a mountain loses
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOnContact;

impl CollisionPolicy for EndOnContact {
    fn respond(&self, contact: ContactKind) -> CollisionResponse {
        match contact {
            ContactKind::Ground => CollisionResponse::correct_and(GamePhase::Victory),
            ContactKind::Mountain => CollisionResponse::correct_and(GamePhase::GameOver),
            ContactKind::Cloud => CollisionResponse::IGNORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_only_never_transitions() {
        for kind in [ContactKind::Ground, ContactKind::Mountain, ContactKind::Cloud] {
            assert_eq!(CorrectOnly.respond(kind).transition, None);
        }
        assert!(CorrectOnly.respond(ContactKind::Ground).correct);
        assert!(!CorrectOnly.respond(ContactKind::Cloud).correct);
    }

    #[test]
    fn test_end_on_contact_transitions() {
        assert_eq!(
            EndOnContact.respond(ContactKind::Ground).transition,
            Some(GamePhase::Victory)
        );
        assert_eq!(
            EndOnContact.respond(ContactKind::Mountain).transition,
            Some(GamePhase::GameOver)
        );
        assert_eq!(
            EndOnContact.respond(ContactKind::Cloud),
            CollisionResponse::IGNORE
        );
    }
}
