//! # Brush
//!
//! Editable convex brush: an ordered plane list plus the polyhedron it bounds.
//!
//! Adding a plane clips the current solid incrementally. Removing, moving or
//! translating planes rebuilds the solid from the edited list. An edit whose
//! result is empty or degenerate is rejected and the brush keeps its previous
//! planes and geometry.

use tracing::{debug, warn};

use crate::config::KernelConfig;
use crate::core::plane::Plane;
use crate::core::vec3::Vec3;
use crate::error::{BrushError, BrushResult};
use crate::polyhedron::{AddPlaneOutcome, BuildOutcome, Degeneracy, Polyhedron, Seed};
use crate::topology::{FaceId, FaceOrigin};

// =============================================================================
// EDIT OUTCOME
// =============================================================================

/// Result of editing a brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The geometry changed.
    Applied,
    /// The plane was recorded but does not touch the solid.
    Redundant,
    /// The edit would leave no volume; it was rejected.
    Empty,
    /// The edit would leave no bounded solid; it was rejected.
    Degenerate(Degeneracy),
}

impl EditOutcome {
    /// True when the brush accepted the edit.
    pub fn is_accepted(&self) -> bool {
        matches!(self, EditOutcome::Applied | EditOutcome::Redundant)
    }
}

// =============================================================================
// BRUSH
// =============================================================================

/// Convex brush defined by half-spaces.
///
/// ## Example
///
/// ```
/// use brush_geometry::{Brush, EditOutcome, KernelConfig, Plane, Vec3};
///
/// let planes = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z]
///     .into_iter()
///     .map(|n| Plane::new(n, 1.0))
///     .collect::<Result<Vec<_>, _>>()?;
/// let mut brush = Brush::from_planes(planes, KernelConfig::default())?
///     .into_solid()
///     .ok_or("not a solid")?;
///
/// let cut = Plane::new(Vec3::X, 0.0)?;
/// assert_eq!(brush.add_plane(cut)?, EditOutcome::Applied);
/// assert_eq!(brush.geometry().face_count(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Brush {
    planes: Vec<Plane>,
    seed: Seed,
    geometry: Polyhedron,
    config: KernelConfig,
}

impl Brush {
    /// Builds a brush from planes inside the world bounds.
    pub fn from_planes(planes: Vec<Plane>, config: KernelConfig) -> BrushResult<BuildOutcome<Self>> {
        Self::from_planes_with_seed(planes, Seed::WorldBounds, config)
    }

    /// Builds a brush from planes inside the given seed.
    pub fn from_planes_with_seed(
        planes: Vec<Plane>,
        seed: Seed,
        config: KernelConfig,
    ) -> BrushResult<BuildOutcome<Self>> {
        Ok(
            match Polyhedron::from_planes_with_seed(&planes, &seed, &config)? {
                BuildOutcome::Solid(geometry) => BuildOutcome::Solid(Self {
                    planes,
                    seed,
                    geometry,
                    config,
                }),
                BuildOutcome::Empty => BuildOutcome::Empty,
                BuildOutcome::Degenerate(degeneracy) => BuildOutcome::Degenerate(degeneracy),
            },
        )
    }

    /// Defining planes, in fold order.
    #[must_use]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Current solid.
    #[must_use]
    pub fn geometry(&self) -> &Polyhedron {
        &self.geometry
    }

    /// Tolerances the brush is built with.
    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Seed the brush is rebuilt from.
    #[must_use]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Face produced by the plane at `index`, if the plane touches the solid.
    #[must_use]
    pub fn face_for_plane(&self, index: usize) -> Option<FaceId> {
        self.geometry.face_with_origin(FaceOrigin::Plane(index))
    }

    /// Indices of planes that own no face.
    #[must_use]
    pub fn redundant_planes(&self) -> Vec<usize> {
        (0..self.planes.len())
            .filter(|&index| self.face_for_plane(index).is_none())
            .collect()
    }

    // =========================================================================
    // EDITS
    // =========================================================================

    /// Clips the brush by one more plane.
    pub fn add_plane(&mut self, plane: Plane) -> BrushResult<EditOutcome> {
        let outcome = match self.geometry.add_plane(plane, &self.config)? {
            AddPlaneOutcome::Clipped => EditOutcome::Applied,
            AddPlaneOutcome::Unchanged => EditOutcome::Redundant,
            AddPlaneOutcome::Empty => return Ok(self.reject("add", EditOutcome::Empty)),
            AddPlaneOutcome::Degenerate(degeneracy) => {
                return Ok(self.reject("add", EditOutcome::Degenerate(degeneracy)))
            }
        };
        self.planes.push(plane);
        debug!(planes = self.planes.len(), ?outcome, "added brush plane");
        Ok(outcome)
    }

    /// Drops the plane at `index` and rebuilds the solid.
    pub fn remove_plane(&mut self, index: usize) -> BrushResult<EditOutcome> {
        self.check_index(index)?;
        let mut planes = self.planes.clone();
        planes.remove(index);
        self.rebuild("remove", planes)
    }

    /// Replaces the plane at `index` and rebuilds the solid.
    pub fn move_plane(&mut self, index: usize, plane: Plane) -> BrushResult<EditOutcome> {
        self.check_index(index)?;
        let mut planes = self.planes.clone();
        planes[index] = plane;
        self.rebuild("move", planes)
    }

    /// Moves every plane by `delta`.
    pub fn translate(&mut self, delta: Vec3) -> BrushResult<EditOutcome> {
        let planes = self.planes.iter().map(|p| p.translated(delta)).collect();
        self.rebuild("translate", planes)
    }

    fn check_index(&self, index: usize) -> BrushResult<()> {
        if index >= self.planes.len() {
            return Err(BrushError::PlaneIndexOutOfRange {
                index,
                count: self.planes.len(),
            });
        }
        Ok(())
    }

    fn rebuild(&mut self, edit: &'static str, planes: Vec<Plane>) -> BrushResult<EditOutcome> {
        match Polyhedron::from_planes_with_seed(&planes, &self.seed, &self.config)? {
            BuildOutcome::Solid(geometry) => {
                self.planes = planes;
                self.geometry = geometry;
                debug!(edit, planes = self.planes.len(), "rebuilt brush");
                Ok(EditOutcome::Applied)
            }
            BuildOutcome::Empty => Ok(self.reject(edit, EditOutcome::Empty)),
            BuildOutcome::Degenerate(degeneracy) => {
                Ok(self.reject(edit, EditOutcome::Degenerate(degeneracy)))
            }
        }
    }

    fn reject(&self, edit: &'static str, outcome: EditOutcome) -> EditOutcome {
        warn!(edit, ?outcome, planes = self.planes.len(), "rejected brush edit");
        outcome
    }
}

#[cfg(test)]
mod tests;
