//! Simulation module
//!
//! All gameplay logic lives here:
//! - Frame-stepped, single-threaded, no wall clock (dt comes from the driver)
//! - Seeded RNG only
//! - Stable iteration order (by layer key, then insertion)
//! - Draws only through the `RenderSurface` trait

pub mod camera;
pub mod collision;
pub mod entity;
pub mod policy;
pub mod scene;
pub mod state;
pub mod tick;
pub mod vector;

pub use camera::Camera;
pub use collision::{Polygon, Projection, sat_collision_check, sat_collision_check_points};
pub use entity::{
    Cloud, Dispatch, Entity, EntityId, EntityKind, Ground, HeroPlane, Label, Mountain,
    WorldContext,
};
pub use policy::{CollisionPolicy, CollisionResponse, ContactKind, CorrectOnly, EndOnContact};
pub use scene::{Contact, Layers, Scene};
pub use state::{Game, GamePhase};
pub use tick::{render, tick};
pub use vector::{Vector2, VectorExt};
