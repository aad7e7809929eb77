//! Seed solids that clipping starts from.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::KernelConfig;
use crate::core::bounds::BoundingBox;
use crate::core::plane::Plane;
use crate::core::vec3::Vec3;
use crate::error::{BrushError, BrushResult};
use crate::polyhedron::{FaceLoop, Polyhedron};
use crate::topology::{FaceOrigin, VertexId};

/// Corner indices of each box side, counter-clockwise seen from outside,
/// paired with the side's outward axis and whether it sits at `max`.
const BOX_SIDES: [([u32; 4], Vec3, bool); 6] = [
    ([0, 4, 6, 2], Vec3::NEG_X, false),
    ([1, 3, 7, 5], Vec3::X, true),
    ([0, 1, 5, 4], Vec3::NEG_Y, false),
    ([2, 6, 7, 3], Vec3::Y, true),
    ([0, 2, 3, 1], Vec3::NEG_Z, false),
    ([4, 5, 7, 6], Vec3::Z, true),
];

/// Starting solid for a clip sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Seed {
    /// Cube spanning the configured world bounds. Sides that survive all
    /// clips mean the planes did not bound the brush.
    #[default]
    WorldBounds,
    /// Explicit box whose sides are legitimate brush faces.
    Box(BoundingBox),
}

impl Seed {
    /// Box the seed solid spans.
    pub fn bounds(&self, cfg: &KernelConfig) -> BoundingBox {
        match self {
            Seed::WorldBounds => BoundingBox::cube(cfg.world_half_extent),
            Seed::Box(bbox) => *bbox,
        }
    }

    /// True when the seed's sides may remain part of the final brush.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Seed::Box(_))
    }

    /// Builds the seed box polyhedron.
    pub fn build(&self, cfg: &KernelConfig) -> BrushResult<Polyhedron> {
        let bbox = self.bounds(cfg);
        if !bbox.is_valid() {
            return Err(BrushError::InvalidSeed {
                min: bbox.min,
                max: bbox.max,
            });
        }

        let positions: Vec<Vec3> = (0..8).map(|corner| bbox.corner(corner)).collect();
        let loops = BOX_SIDES
            .iter()
            .map(|&(corners, normal, at_max)| {
                let anchor = if at_max { bbox.max } else { bbox.min };
                Ok(FaceLoop {
                    plane: Plane::new(normal, normal.dot(anchor))?,
                    origin: FaceOrigin::Seed,
                    vertices: corners.iter().map(|&c| VertexId(c)).collect(),
                })
            })
            .collect::<BrushResult<Vec<_>>>()?;

        trace!(min = %bbox.min, max = %bbox.max, "building seed box");
        Ok(Polyhedron::assemble(positions, loops, 0, cfg)?)
    }
}
