//! Brush geometry kernel for the map editor.
//!
//! This crate builds the boundary representation of convex brushes with an
//! index-based vertex/edge/face arena, and recomputes it whenever a brush is
//! cut by another bounding plane.
//!
//! ```
//! use brush_geometry::{BuildOutcome, KernelConfig, Plane, Polyhedron, Vec3};
//!
//! let cfg = KernelConfig::default();
//! let planes = [
//!     Plane::new(Vec3::X, 1.0).unwrap(),
//!     Plane::new(Vec3::NEG_X, 0.0).unwrap(),
//!     Plane::new(Vec3::Y, 1.0).unwrap(),
//!     Plane::new(Vec3::NEG_Y, 0.0).unwrap(),
//!     Plane::new(Vec3::Z, 1.0).unwrap(),
//!     Plane::new(Vec3::NEG_Z, 0.0).unwrap(),
//! ];
//!
//! match Polyhedron::from_planes(&planes, &cfg).unwrap() {
//!     BuildOutcome::Solid(cube) => assert_eq!(cube.vertex_count(), 8),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod batch;
pub mod brush;
pub mod clip;
pub mod config;
pub mod core;
pub mod error;
pub mod polyhedron;
pub mod topology;

pub use crate::brush::{Brush, EditOutcome};
pub use crate::clip::{clip, ClipOutcome};
pub use crate::config::KernelConfig;
pub use crate::core::bounds::BoundingBox;
pub use crate::core::plane::{Plane, PointStatus};
pub use crate::core::vec3::Vec3;
pub use crate::error::{BrushError, BrushResult};
pub use crate::polyhedron::seed::Seed;
pub use crate::polyhedron::{AddPlaneOutcome, BuildOutcome, Degeneracy, Polyhedron, RayHit};
pub use crate::topology::{Edge, EdgeId, Face, FaceId, FaceOrigin, TopologyError, Vertex, VertexId};
