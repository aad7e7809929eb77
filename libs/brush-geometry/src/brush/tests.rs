//! Tests for brush editing.

use super::*;
use crate::core::bounds::BoundingBox;
use approx::assert_relative_eq;

fn plane(normal: Vec3, distance: f64) -> Plane {
    Plane::new(normal, distance).unwrap()
}

fn unit_cube_brush() -> Brush {
    let planes = vec![
        plane(Vec3::X, 1.0),
        plane(Vec3::NEG_X, 0.0),
        plane(Vec3::Y, 1.0),
        plane(Vec3::NEG_Y, 0.0),
        plane(Vec3::Z, 1.0),
        plane(Vec3::NEG_Z, 0.0),
    ];
    Brush::from_planes(planes, KernelConfig::default())
        .unwrap()
        .into_solid()
        .unwrap()
}

#[test]
fn test_from_planes_builds_solid() {
    let brush = unit_cube_brush();

    assert_eq!(brush.planes().len(), 6);
    assert_eq!(brush.geometry().face_count(), 6);
    assert!(brush.redundant_planes().is_empty());
    assert_eq!(brush.seed(), &Seed::WorldBounds);
}

#[test]
fn test_from_planes_reports_unbounded() {
    let outcome = Brush::from_planes(vec![plane(Vec3::Z, 0.0)], KernelConfig::default()).unwrap();

    assert!(matches!(
        outcome,
        BuildOutcome::Degenerate(Degeneracy::Unbounded)
    ));
}

#[test]
fn test_add_plane_clips() {
    let mut brush = unit_cube_brush();

    let outcome = brush.add_plane(plane(Vec3::X, 0.5)).unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(brush.planes().len(), 7);
    assert!(brush.face_for_plane(6).is_some());
    assert_eq!(brush.redundant_planes(), vec![0]);
    assert_relative_eq!(brush.geometry().volume(), 0.5, epsilon = 1e-9);
}

#[test]
fn test_add_redundant_plane_is_recorded() {
    let mut brush = unit_cube_brush();

    let outcome = brush.add_plane(plane(Vec3::X, 5.0)).unwrap();

    assert_eq!(outcome, EditOutcome::Redundant);
    assert!(outcome.is_accepted());
    assert_eq!(brush.planes().len(), 7);
    assert_eq!(brush.redundant_planes(), vec![6]);
}

#[test]
fn test_add_plane_rejects_empty_result() {
    let mut brush = unit_cube_brush();
    let before = brush.geometry().clone();

    let outcome = brush.add_plane(plane(Vec3::NEG_X, -2.0)).unwrap();

    assert_eq!(outcome, EditOutcome::Empty);
    assert!(!outcome.is_accepted());
    assert_eq!(brush.planes().len(), 6);
    assert_eq!(brush.geometry(), &before);
}

#[test]
fn test_remove_plane_rebuilds() {
    let mut brush = unit_cube_brush();
    brush.add_plane(plane(Vec3::X, 0.5)).unwrap();

    let outcome = brush.remove_plane(6).unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(brush.planes().len(), 6);
    assert_relative_eq!(brush.geometry().volume(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_remove_bounding_plane_is_rejected() {
    let mut brush = unit_cube_brush();
    let before = brush.planes().to_vec();

    let outcome = brush.remove_plane(2).unwrap();

    assert_eq!(outcome, EditOutcome::Degenerate(Degeneracy::Unbounded));
    assert_eq!(brush.planes(), before.as_slice());
    assert_eq!(brush.geometry().face_count(), 6);
}

#[test]
fn test_move_plane() {
    let mut brush = unit_cube_brush();

    let outcome = brush.move_plane(4, plane(Vec3::Z, 3.0)).unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert_relative_eq!(brush.geometry().volume(), 3.0, epsilon = 1e-9);
    assert_eq!(brush.planes()[4], plane(Vec3::Z, 3.0));
}

#[test]
fn test_move_plane_past_opposite_face_is_rejected() {
    let mut brush = unit_cube_brush();

    let outcome = brush.move_plane(0, plane(Vec3::X, -1.0)).unwrap();

    assert_eq!(outcome, EditOutcome::Empty);
    assert_eq!(brush.planes()[0], plane(Vec3::X, 1.0));
}

#[test]
fn test_index_out_of_range() {
    let mut brush = unit_cube_brush();

    assert_eq!(
        brush.remove_plane(6),
        Err(BrushError::PlaneIndexOutOfRange { index: 6, count: 6 })
    );
    assert!(brush.move_plane(10, plane(Vec3::X, 0.0)).is_err());
}

#[test]
fn test_translate_moves_geometry() {
    let mut brush = unit_cube_brush();

    let outcome = brush.translate(Vec3::new(2.0, 0.0, -1.0)).unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    let bounds = brush.geometry().bounds();
    assert!(bounds.min.distance(Vec3::new(2.0, 0.0, -1.0)) < 1e-9);
    assert!(bounds.max.distance(Vec3::new(3.0, 1.0, 0.0)) < 1e-9);
    assert_relative_eq!(brush.geometry().volume(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_box_seeded_brush_keeps_seed_on_rebuild() {
    let seed = Seed::Box(BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0)));
    let mut brush =
        Brush::from_planes_with_seed(vec![plane(Vec3::X, 1.0)], seed, KernelConfig::default())
            .unwrap()
            .into_solid()
            .unwrap();

    let outcome = brush.remove_plane(0).unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert!(brush.planes().is_empty());
    assert_relative_eq!(brush.geometry().volume(), 8.0, epsilon = 1e-9);
}
