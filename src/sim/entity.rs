//! Game entities
//!
//! A closed set of variants. Each one knows how to react to input, advance
//! itself, report its collider and draw itself. Nothing here holds a pointer
//! back into the scene; camera and screen information arrive through
//! [`WorldContext`].

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::collision::Polygon;
use super::policy::ContactKind;
use crate::consts::*;
use crate::error::Result;
use crate::input::{Control, InputSource};
use crate::renderer::{Rect, RenderSurface, colors};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Per-frame view of the world handed to entities
#[derive(Debug, Clone, Copy)]
pub struct WorldContext<'a> {
    pub camera: Camera,
    pub settings: &'a Settings,
}

/// Result of offering input to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Later entities in the same layer do not see this input
    Consumed,
    Pass,
}

/// The player's plane (screen-anchored horizontally)
#[derive(Debug, Clone)]
pub struct HeroPlane {
    /// Screen x of the left edge
    pub x: f32,
    /// Screen y of the bottom edge
    pub y: f32,
    /// Horizontal cruise speed (units per second)
    pub speed: f32,
}

impl Default for HeroPlane {
    fn default() -> Self {
        Self {
            x: HERO_START_X,
            y: HERO_START_Y,
            speed: HERO_HORIZONTAL_SPEED,
        }
    }
}

impl HeroPlane {
    pub fn handle_input(&mut self, input: &dyn InputSource) -> Dispatch {
        if input.was_pressed(Control::NudgeUp) {
            self.y -= HERO_NUDGE;
        } else if input.was_pressed(Control::NudgeDown) {
            self.y += HERO_NUDGE;
        } else {
            return Dispatch::Pass;
        }
        self.clamp_to_ceiling();
        Dispatch::Consumed
    }

    /// Only the first held control in priority order up, down, left, right applies
    pub fn update(&mut self, dt: f32, input: &dyn InputSource) {
        let step = HERO_VERTICAL_SPEED * dt / 1000.0;
        if input.is_held(Control::Up) {
            self.y -= step;
        } else if input.is_held(Control::Down) {
            self.y += step;
        } else if input.is_held(Control::Left) {
            self.speed = (self.speed - HERO_SPEED_STEP).clamp(0.0, HERO_SPEED_MAX);
        } else if input.is_held(Control::Right) {
            self.speed = (self.speed + HERO_SPEED_STEP).clamp(0.0, HERO_SPEED_MAX);
        }
        self.clamp_to_ceiling();
    }

    fn clamp_to_ceiling(&mut self) {
        self.y = self.y.max(HERO_HEIGHT);
    }

    /// Screen-space bounding box
    pub fn screen_rect(&self) -> Rect {
        Rect::new(self.x, self.y - HERO_HEIGHT, HERO_WIDTH, HERO_HEIGHT)
    }

    pub fn collider(&self, camera: &Camera) -> Result<Polygon> {
        let r = self.screen_rect();
        Polygon::rect(camera.to_world(r.min), r.size)
    }

    /// Put the plane's underside just above a world-space surface
    pub fn rest_on(&mut self, surface_top: f32, camera: &Camera) {
        self.y = surface_top - camera.y - HERO_REST_MARGIN;
        self.clamp_to_ceiling();
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(self.screen_rect(), colors::HERO);
    }
}

/// A triangular peak standing on the ground
#[derive(Debug, Clone)]
pub struct Mountain {
    /// World x of the apex (and base center)
    pub x: f32,
    /// World y of the base
    pub y: f32,
    pub height: f32,
    pub width: f32,
}

impl Mountain {
    pub fn new(x: f32, y: f32, height: f32, width: f32) -> Self {
        Self {
            x,
            y,
            height,
            width,
        }
    }

    /// Random mountain with its base center at `x`
    pub fn generate(x: f32, base_y: f32, rng: &mut Pcg32) -> Self {
        let height = rng.random_range(MOUNTAIN_MIN_HEIGHT..=MOUNTAIN_MAX_HEIGHT);
        let ratio = rng.random_range(MOUNTAIN_MIN_WIDTH_RATIO..=MOUNTAIN_MAX_WIDTH_RATIO);
        Self::new(x, base_y, height, (height * ratio).round())
    }

    pub fn apex_y(&self) -> f32 {
        self.y - self.height
    }

    /// World x of the right base corner
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width / 2.0
    }

    fn points(&self) -> [Vec2; 3] {
        [
            Vec2::new(self.x - self.width / 2.0, self.y),
            Vec2::new(self.x, self.apex_y()),
            Vec2::new(self.trailing_edge(), self.y),
        ]
    }

    pub fn collider(&self) -> Result<Polygon> {
        Polygon::new(self.points().to_vec())
    }

    fn render(&self, camera: &Camera, surface: &mut dyn RenderSurface) {
        let pts = self.points().map(|p| camera.to_screen(p));
        surface.fill_polygon(&pts, colors::MOUNTAIN);
    }
}

/// Ground strip spanning the whole screen width
#[derive(Debug, Clone)]
pub struct Ground {
    /// World y of the top edge
    pub y: f32,
}

impl Ground {
    pub fn collider(&self, camera: &Camera, settings: &Settings) -> Result<Polygon> {
        Polygon::rect(
            Vec2::new(camera.x, self.y),
            Vec2::new(settings.screen_width, settings.ground_height),
        )
    }

    fn render(&self, camera: &Camera, settings: &Settings, surface: &mut dyn RenderSurface) {
        surface.fill_rect(
            Rect::new(0.0, self.y - camera.y, settings.screen_width, settings.ground_height),
            colors::GROUND,
        );
    }
}

/// Drifting background cloud, recycled once it falls behind the camera
#[derive(Debug, Clone)]
pub struct Cloud {
    /// World position of the top-left corner
    pub pos: Vec2,
}

impl Cloud {
    pub fn update(&mut self, world: &WorldContext<'_>, rng: &mut Pcg32) {
        let camera = world.camera;
        if self.pos.x >= camera.x - CLOUD_DESPAWN_DISTANCE {
            return;
        }
        let settings = world.settings;
        let max_y =
            (settings.screen_height - settings.ground_height - CLOUD_GROUND_CLEARANCE).max(0.0);
        self.pos = Vec2::new(
            camera.x + settings.screen_width + rng.random_range(0.0..=CLOUD_RESPAWN_SPREAD),
            rng.random_range(0.0..=max_y),
        );
        log::debug!("Cloud respawned at ({:.0}, {:.0})", self.pos.x, self.pos.y);
    }

    pub fn collider(&self) -> Result<Polygon> {
        Polygon::rect(self.pos, Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT))
    }

    fn render(&self, camera: &Camera, surface: &mut dyn RenderSurface) {
        let p = camera.to_screen(self.pos);
        surface.fill_rect(Rect::new(p.x, p.y, CLOUD_WIDTH, CLOUD_HEIGHT), colors::CLOUD);
    }
}

/// Static screen-space text
#[derive(Debug, Clone)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
}

/// Entity variants
#[derive(Debug, Clone)]
pub enum EntityKind {
    Hero(HeroPlane),
    Mountain(Mountain),
    Ground(Ground),
    Cloud(Cloud),
    Text(Label),
}

/// An entity owned by a scene layer
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
}

impl Entity {
    pub fn handle_input(&mut self, input: &dyn InputSource) -> Dispatch {
        match &mut self.kind {
            EntityKind::Hero(hero) => hero.handle_input(input),
            _ => Dispatch::Pass,
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        _elapsed: f32,
        input: &dyn InputSource,
        world: &WorldContext<'_>,
        rng: &mut Pcg32,
    ) {
        match &mut self.kind {
            EntityKind::Hero(hero) => hero.update(dt, input),
            EntityKind::Cloud(cloud) => cloud.update(world, rng),
            EntityKind::Mountain(_) | EntityKind::Ground(_) | EntityKind::Text(_) => {}
        }
    }

    /// World-space collider, `None` for decorative entities
    pub fn collider(&self, world: &WorldContext<'_>) -> Result<Option<Polygon>> {
        let poly = match &self.kind {
            EntityKind::Hero(hero) => hero.collider(&world.camera)?,
            EntityKind::Mountain(m) => m.collider()?,
            EntityKind::Ground(g) => g.collider(&world.camera, world.settings)?,
            EntityKind::Cloud(c) => c.collider()?,
            EntityKind::Text(_) => return Ok(None),
        };
        Ok(Some(poly))
    }

    /// What the hero hits when it touches this entity, plus the surface top (world y)
    pub fn contact(&self) -> Option<(ContactKind, f32)> {
        match &self.kind {
            EntityKind::Ground(g) => Some((ContactKind::Ground, g.y)),
            EntityKind::Mountain(m) => Some((ContactKind::Mountain, m.apex_y())),
            EntityKind::Cloud(c) => Some((ContactKind::Cloud, c.pos.y)),
            EntityKind::Hero(_) | EntityKind::Text(_) => None,
        }
    }

    pub fn render(&self, world: &WorldContext<'_>, surface: &mut dyn RenderSurface) {
        let camera = &world.camera;
        match &self.kind {
            EntityKind::Hero(hero) => hero.render(surface),
            EntityKind::Mountain(m) => m.render(camera, surface),
            EntityKind::Ground(g) => g.render(camera, world.settings, surface),
            EntityKind::Cloud(c) => c.render(camera, surface),
            EntityKind::Text(label) => surface.draw_text(&label.text, label.pos, label.color),
        }
    }
}
