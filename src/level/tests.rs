//! Level domain: tests for the collider store and overlap primitive.

use bevy::prelude::{Rect, Vec2};

use super::{Collider, Colliders, LevelLayout};

fn probe(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_corners(Vec2::new(x, y), Vec2::new(x + w, y + h))
}

// -----------------------------------------------------------------------------
// Overlap primitive
// -----------------------------------------------------------------------------

#[test]
fn test_collider_edges() {
    let c = Collider::new(350.0, 450.0, 200.0, 80.0);
    assert_eq!(c.left(), 350.0);
    assert_eq!(c.right(), 550.0);
    assert_eq!(c.top(), 450.0);
    assert_eq!(c.bottom(), 530.0);
}

#[test]
fn test_overlap_detects_intersection() {
    let c = Collider::new(0.0, 0.0, 100.0, 100.0);
    assert!(c.overlaps(probe(50.0, 50.0, 100.0, 100.0)));
    assert!(c.overlaps(probe(10.0, 10.0, 5.0, 5.0)));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    let c = Collider::new(0.0, 680.0, 1200.0, 40.0);
    // Resting exactly on top
    assert!(!c.overlaps(probe(100.0, 560.0, 60.0, 120.0)));
    // Flush against the left side
    assert!(!c.overlaps(probe(-60.0, 690.0, 60.0, 20.0)));
}

#[test]
fn test_separated_rects_do_not_overlap() {
    let c = Collider::new(0.0, 0.0, 10.0, 10.0);
    assert!(!c.overlaps(probe(20.0, 20.0, 5.0, 5.0)));
}

// -----------------------------------------------------------------------------
// Collider store
// -----------------------------------------------------------------------------

#[test]
fn test_first_overlap_uses_store_order_not_distance() {
    // Far collider inserted first, near collider second; both overlap the probe.
    let colliders: Colliders = [
        Collider::new(140.0, 0.0, 100.0, 100.0),
        Collider::new(90.0, 0.0, 100.0, 100.0),
    ]
    .into_iter()
    .collect();

    let hit = colliders
        .first_overlap(probe(100.0, 10.0, 60.0, 60.0))
        .copied();
    assert_eq!(hit, Some(Collider::new(140.0, 0.0, 100.0, 100.0)));
}

#[test]
fn test_first_overlap_none_when_clear() {
    let colliders = Colliders::from_platforms(&LevelLayout::default().platforms);
    assert!(colliders.first_overlap(probe(0.0, 0.0, 60.0, 120.0)).is_none());
}

#[test]
fn test_empty_store_never_hits() {
    let colliders = Colliders::default();
    assert!(colliders.is_empty());
    assert!(colliders.first_overlap(probe(0.0, 0.0, 1e6, 1e6)).is_none());
}

#[test]
fn test_store_built_from_default_layout_preserves_order() {
    let layout = LevelLayout::default();
    let colliders = Colliders::from_platforms(&layout.platforms);

    assert_eq!(colliders.len(), layout.platforms.len());
    for (collider, platform) in colliders.iter().zip(&layout.platforms) {
        assert_eq!(collider.rect(), *platform);
    }
}

#[test]
fn test_default_layout_has_floor_at_680() {
    let layout = LevelLayout::default();
    assert!(
        layout
            .platforms
            .iter()
            .any(|p| p.min.y == 680.0 && p.min.x == 0.0 && p.width() == 1200.0)
    );
}
