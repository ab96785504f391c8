//! Scenes and their layered entity storage
//!
//! A scene owns every entity it shows, bucketed into integer layers. Layers
//! update and render in ascending key order; inside a layer, insertion order
//! wins. Structural changes (spawn/despawn) are never made while a layer is
//! being walked: they are collected first and applied afterwards.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::collision::sat_collision_check;
use super::entity::{
    Cloud, Dispatch, Entity, EntityId, EntityKind, Ground, HeroPlane, Label, Mountain,
    WorldContext,
};
use super::policy::{CollisionPolicy, ContactKind};
use super::state::GamePhase;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::input::InputSource;
use crate::renderer::{Rect, RenderSurface, colors};
use crate::settings::Settings;

/// Layer key → entities in insertion order
pub type Layers = BTreeMap<i32, Vec<Entity>>;

/// A hero contact found during collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub entity: EntityId,
    pub kind: ContactKind,
    /// World y of the surface the hero would rest on
    pub surface_top: f32,
}

#[derive(Debug)]
pub struct Scene {
    pub phase: GamePhase,
    pub camera: Camera,
    layers: Layers,
    rng: Pcg32,
    hero: Option<EntityId>,
    next_id: u32,
}

impl Scene {
    pub fn new(phase: GamePhase, seed: u64) -> Self {
        Self {
            phase,
            camera: Camera::default(),
            layers: Layers::new(),
            rng: Pcg32::seed_from_u64(seed),
            hero: None,
            next_id: 1,
        }
    }

    /// Populate the scene's initial entities
    ///
    /// `distance` is the distance flown in the previous run (shown on end screens).
    pub fn activate(&mut self, settings: &Settings, distance: f32) {
        self.layers.clear();
        self.camera = Camera::default();
        self.hero = None;

        match self.phase {
            GamePhase::Playing => self.populate_play(settings),
            GamePhase::GameOver => {
                self.populate_banner(settings, "GAME OVER", colors::GAME_OVER, distance)
            }
            GamePhase::Victory => {
                self.populate_banner(settings, "YOU LANDED!", colors::VICTORY, distance)
            }
        }
        log::info!(
            "Activated {:?} scene with {} entities",
            self.phase,
            self.entities().count()
        );
    }

    fn populate_play(&mut self, settings: &Settings) {
        let ground_top = settings.ground_top();

        let hero = self.add(EntityKind::Hero(HeroPlane::default()), LAYER_HERO);
        self.hero = Some(hero);

        for i in 0..MOUNTAIN_COUNT {
            let x = settings.screen_width + MOUNTAIN_FIRST_OFFSET + MOUNTAIN_SPACING * i as f32;
            let mountain = Mountain::generate(x, ground_top, &mut self.rng);
            self.add(EntityKind::Mountain(mountain), LAYER_TERRAIN);
        }

        self.add(EntityKind::Ground(Ground { y: ground_top }), LAYER_TERRAIN);

        for (x, y) in CLOUD_START_POSITIONS {
            let cloud = Cloud {
                pos: Vec2::new(x, y),
            };
            self.add(EntityKind::Cloud(cloud), LAYER_BACKGROUND);
        }
    }

    fn populate_banner(
        &mut self,
        settings: &Settings,
        title: &str,
        color: [f32; 4],
        distance: f32,
    ) {
        let center_x = settings.screen_width / 2.0;
        let center_y = settings.screen_height / 2.0;
        let lines = [
            (title.to_owned(), color, -40.0),
            (format!("Distance: {:.0}", distance), colors::TEXT, 0.0),
            ("R to restart, Esc to quit".to_owned(), colors::TEXT, 40.0),
        ];
        for (text, color, dy) in lines {
            let label = Label {
                pos: Vec2::new(center_x, center_y + dy),
                text,
                color,
            };
            self.add(EntityKind::Text(label), LAYER_TEXT);
        }
    }

    /// Add an entity to a layer, returning its id
    pub fn add(&mut self, kind: EntityKind, layer: i32) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.layers.entry(layer).or_default().push(Entity { id, kind });
        id
    }

    /// Remove an entity from whichever layer holds it
    ///
    /// Fails with `EntityNotFound` when it is not present. Empty layers are kept.
    pub fn remove(&mut self, id: EntityId) -> Result<Entity> {
        for entities in self.layers.values_mut() {
            if let Some(idx) = entities.iter().position(|e| e.id == id) {
                return Ok(entities.remove(idx));
            }
        }
        Err(Error::EntityNotFound(id))
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    /// All entities in layer order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.layers.values().flatten()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities().find(|e| e.id == id)
    }

    pub fn count_where(&self, pred: impl Fn(&EntityKind) -> bool) -> usize {
        self.entities().filter(|e| pred(&e.kind)).count()
    }

    pub fn hero(&self) -> Option<&HeroPlane> {
        let id = self.hero?;
        match &self.get(id)?.kind {
            EntityKind::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    pub fn hero_mut(&mut self) -> Option<&mut HeroPlane> {
        let id = self.hero?;
        self.layers
            .values_mut()
            .flatten()
            .find(|e| e.id == id)
            .and_then(|e| match &mut e.kind {
                EntityKind::Hero(hero) => Some(hero),
                _ => None,
            })
    }

    /// Distance flown so far
    pub fn distance(&self) -> f32 {
        self.camera.x
    }

    fn world<'a>(&self, settings: &'a Settings) -> WorldContext<'a> {
        WorldContext {
            camera: self.camera,
            settings,
        }
    }

    /// Offer input to entities layer by layer
    ///
    /// A consuming entity stops dispatch for the rest of its own layer only.
    pub fn dispatch_input(&mut self, input: &dyn InputSource) {
        for entities in self.layers.values_mut() {
            for entity in entities.iter_mut() {
                if entity.handle_input(input) == Dispatch::Consumed {
                    break;
                }
            }
        }
    }

    /// Scroll the camera by the hero's cruise speed
    pub fn advance_camera(&mut self, dt: f32) {
        let speed = self.hero().map_or(0.0, |h| h.speed);
        self.camera.advance(dt * speed / 1000.0);
    }

    pub fn update_entities(
        &mut self,
        dt: f32,
        elapsed: f32,
        input: &dyn InputSource,
        settings: &Settings,
    ) {
        let world = self.world(settings);
        let rng = &mut self.rng;
        for entity in self.layers.values_mut().flatten() {
            entity.update(dt, elapsed, input, &world, rng);
        }
    }

    /// Replace every mountain whose trailing edge has scrolled behind the camera
    ///
    /// Returns how many were replaced. The live mountain count never changes.
    pub fn recycle_mountains(&mut self, settings: &Settings) -> Result<usize> {
        let camera_x = self.camera.x;
        let expired: Vec<(i32, EntityId)> = self
            .layers
            .iter()
            .flat_map(|(layer, entities)| entities.iter().map(move |e| (*layer, e)))
            .filter_map(|(layer, e)| match &e.kind {
                EntityKind::Mountain(m) if m.trailing_edge() < camera_x => Some((layer, e.id)),
                _ => None,
            })
            .collect();

        for (i, (layer, id)) in expired.iter().enumerate() {
            self.remove(*id)?;
            let x = camera_x
                + settings.screen_width
                + MOUNTAIN_RESPAWN_OFFSET
                + MOUNTAIN_SPACING * i as f32;
            let mountain = Mountain::generate(x, settings.ground_top(), &mut self.rng);
            log::debug!(
                "Recycled mountain {:?}: new peak at x={:.0}, height={:.0}",
                id,
                mountain.x,
                mountain.height
            );
            self.add(EntityKind::Mountain(mountain), *layer);
        }

        Ok(expired.len())
    }

    /// Test the hero against every collidable entity
    pub fn find_contacts(&self, settings: &Settings) -> Result<Vec<Contact>> {
        let Some(hero_id) = self.hero else {
            return Ok(Vec::new());
        };
        let world = self.world(settings);
        let Some(hero_poly) = self
            .get(hero_id)
            .map(|e| e.collider(&world))
            .transpose()?
            .flatten()
        else {
            return Ok(Vec::new());
        };

        let mut contacts = Vec::new();
        for entity in self.entities() {
            let Some((kind, surface_top)) = entity.contact() else {
                continue;
            };
            if kind == ContactKind::Cloud && !settings.clouds_collide {
                continue;
            }
            let Some(poly) = entity.collider(&world)? else {
                continue;
            };
            if sat_collision_check(&hero_poly, &poly)? {
                contacts.push(Contact {
                    entity: entity.id,
                    kind,
                    surface_top,
                });
            }
        }
        Ok(contacts)
    }

    /// Run collision detection and apply the policy's responses
    ///
    /// All contacts are gathered before the hero moves. It is corrected once,
    /// onto the highest surface it touches, and the highest-precedence
    /// transition wins regardless of entity order.
    pub fn resolve_collisions(
        &mut self,
        settings: &Settings,
        policy: &dyn CollisionPolicy,
    ) -> Result<Option<GamePhase>> {
        let contacts = self.find_contacts(settings)?;
        let mut rest_top: Option<f32> = None;
        let mut next_phase: Option<GamePhase> = None;

        for contact in contacts {
            let response = policy.respond(contact.kind);
            log::debug!("Hero contact with {:?} ({:?})", contact.kind, contact.entity);
            if response.correct {
                let top = contact.surface_top;
                rest_top = Some(rest_top.map_or(top, |y| y.min(top)));
            }
            if let Some(phase) = response.transition {
                if next_phase.is_none_or(|p| phase.precedence() > p.precedence()) {
                    next_phase = Some(phase);
                }
            }
        }

        if let Some(surface_top) = rest_top {
            let camera = self.camera;
            if let Some(hero) = self.hero_mut() {
                hero.rest_on(surface_top, &camera);
            }
        }

        Ok(next_phase)
    }

    /// Draw the sky and every layer in ascending order
    pub fn render(&self, settings: &Settings, surface: &mut dyn RenderSurface) {
        surface.fill_rect(
            Rect::new(0.0, 0.0, settings.screen_width, settings.screen_height),
            colors::SKY,
        );
        let world = self.world(settings);
        for entity in self.entities() {
            entity.render(&world, surface);
        }
    }
}
