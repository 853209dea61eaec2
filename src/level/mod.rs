//! Level domain: static platform geometry and the collider store.

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::world_to_screen;

/// Fill colour for platform rectangles.
const PLATFORM_COLOR: Color = Color::srgb(0.0, 0.47, 0.95);

/// A solid, immutable axis-aligned rectangle in world space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    rect: Rect,
}

impl Collider {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, x + width, y + height),
        }
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn left(&self) -> f32 {
        self.rect.min.x
    }

    pub fn right(&self) -> f32 {
        self.rect.max.x
    }

    pub fn top(&self) -> f32 {
        self.rect.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.rect.max.y
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: Rect) -> bool {
        !self.rect.intersect(other).is_empty()
    }
}

/// Ordered, read-only collider store. Order is significant: queries return
/// the first match in insertion order, not the nearest one.
#[derive(Resource, Debug, Default, Clone)]
pub struct Colliders {
    items: Vec<Collider>,
}

impl Colliders {
    pub fn from_platforms(platforms: &[Rect]) -> Self {
        Self {
            items: platforms
                .iter()
                .map(|r| Collider::new(r.min.x, r.min.y, r.width(), r.height()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(any(test, feature = "dev-tools"))]
    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.items.iter()
    }

    /// First collider (in store order) overlapping `probe`.
    pub fn first_overlap(&self, probe: Rect) -> Option<&Collider> {
        self.items.iter().find(|c| c.overlaps(probe))
    }
}

impl FromIterator<Collider> for Colliders {
    fn from_iter<I: IntoIterator<Item = Collider>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Hardcoded platform list the level is built from.
#[derive(Resource, Debug, Clone)]
pub struct LevelLayout {
    pub platforms: Vec<Rect>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let platform = |x: f32, y: f32, w: f32, h: f32| Rect::new(x, y, x + w, y + h);
        Self {
            platforms: vec![
                // Right boundary wall
                platform(1200.0, -120.0, 80.0, 850.0),
                // Floor
                platform(0.0, 680.0, 1200.0, 40.0),
                platform(350.0, 450.0, 200.0, 80.0),
                platform(800.0, 200.0, 200.0, 80.0),
                // Thin post, narrow enough to dash through
                platform(600.0, 500.0, 10.0, 220.0),
            ],
        }
    }
}

/// Marker for platform sprites.
#[derive(Component, Debug)]
pub struct Platform;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        let layout = LevelLayout::default();
        let colliders = Colliders::from_platforms(&layout.platforms);

        app.insert_resource(colliders)
            .insert_resource(layout)
            .add_systems(Startup, spawn_platforms);
    }
}

fn spawn_platforms(mut commands: Commands, layout: Res<LevelLayout>, colliders: Res<Colliders>) {
    for rect in &layout.platforms {
        let center = world_to_screen(rect.center());
        commands.spawn((
            Platform,
            Sprite {
                color: PLATFORM_COLOR,
                custom_size: Some(rect.size()),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
        ));
    }

    if colliders.is_empty() {
        warn!("Level has no colliders; nothing will stop the player falling");
    }

    info!(
        "Level loaded: {} platforms, {} colliders",
        layout.platforms.len(),
        colliders.len()
    );
}
