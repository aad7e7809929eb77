//! Parallel construction of independent brushes.
//!
//! Each plane set is folded on its own rayon worker; workers share only the
//! read-only configuration.

use rayon::prelude::*;
use tracing::debug;

use crate::config::KernelConfig;
use crate::core::plane::Plane;
use crate::error::BrushResult;
use crate::polyhedron::{BuildOutcome, Polyhedron, Seed};

/// Builds one polyhedron per plane set, in input order.
pub fn build_all(
    plane_sets: &[Vec<Plane>],
    cfg: &KernelConfig,
) -> Vec<BrushResult<BuildOutcome<Polyhedron>>> {
    build_all_with_seed(plane_sets, &Seed::WorldBounds, cfg)
}

/// Builds one polyhedron per plane set inside a shared seed.
pub fn build_all_with_seed(
    plane_sets: &[Vec<Plane>],
    seed: &Seed,
    cfg: &KernelConfig,
) -> Vec<BrushResult<BuildOutcome<Polyhedron>>> {
    debug!(brushes = plane_sets.len(), "building brushes in parallel");
    plane_sets
        .par_iter()
        .map(|planes| Polyhedron::from_planes_with_seed(planes, seed, cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec3::Vec3;

    fn cube(size: f64) -> Vec<Plane> {
        [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z]
            .into_iter()
            .map(|n| Plane::new(n, size * 0.5).unwrap())
            .collect()
    }

    #[test]
    fn test_build_all_preserves_order() {
        let cfg = KernelConfig::default();
        let sets: Vec<Vec<Plane>> = (1..=8).map(|i| cube(i as f64)).collect();

        let results = build_all(&sets, &cfg);

        assert_eq!(results.len(), 8);
        for (i, result) in results.into_iter().enumerate() {
            let solid = result.unwrap().into_solid().unwrap();
            let size = (i + 1) as f64;
            assert!((solid.volume() - size * size * size).abs() < 1e-6);
        }
    }

    #[test]
    fn test_build_all_reports_each_outcome() {
        let cfg = KernelConfig::default();
        let sets = vec![
            cube(2.0),
            vec![Plane::new(Vec3::X, 0.0).unwrap()],
            vec![
                Plane::new(Vec3::X, 0.0).unwrap(),
                Plane::new(Vec3::NEG_X, -1.0).unwrap(),
            ],
        ];

        let results = build_all(&sets, &cfg);

        assert!(results[0].as_ref().unwrap().is_solid());
        assert!(matches!(
            results[1],
            Ok(BuildOutcome::Degenerate(crate::polyhedron::Degeneracy::Unbounded))
        ));
        assert!(matches!(results[2], Ok(BuildOutcome::Empty)));
    }
}
