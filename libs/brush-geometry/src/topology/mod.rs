//! Vertex/edge/face arena for convex brushes.
//!
//! All references between elements are indices into the owning
//! [`Polyhedron`](crate::polyhedron::Polyhedron)'s arrays. Only the polyhedron
//! and the clipper create or rewire these elements; callers get read-only
//! access.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::plane::Plane;
use crate::core::vec3::{approx_eq, Vec3};

/// Unique identifier for vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Unique identifier for edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

/// Unique identifier for faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

impl VertexId {
    /// Position of the vertex in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// Position of the edge in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    /// Position of the face in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a face's supporting plane came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceOrigin {
    /// One of the six sides of the seed box.
    Seed,
    /// The plane folded in at this position of the clip sequence.
    Plane(usize),
}

// =============================================================================
// VERTEX
// =============================================================================

/// A corner of the brush.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub(crate) position: Vec3,
    pub(crate) edges: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(position: Vec3) -> Self {
        Self {
            position,
            edges: Vec::new(),
        }
    }

    /// Position in 3D space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Incident edges, in no particular order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// An undirected edge shared by exactly two faces.
///
/// The left face traverses the edge from `start` to `end`, the right face
/// from `end` to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
    pub(crate) left: FaceId,
    pub(crate) right: FaceId,
}

impl Edge {
    /// Vertex the left face leaves the edge from.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Vertex the left face enters after the edge.
    pub fn end(&self) -> VertexId {
        self.end
    }

    /// Face traversing the edge from start to end.
    pub fn left(&self) -> FaceId {
        self.left
    }

    /// Face traversing the edge from end to start.
    pub fn right(&self) -> FaceId {
        self.right
    }

    /// Both endpoints.
    pub fn vertices(&self) -> [VertexId; 2] {
        [self.start, self.end]
    }

    /// Both bounding faces.
    pub fn faces(&self) -> [FaceId; 2] {
        [self.left, self.right]
    }

    /// First vertex of the edge in the boundary order of `side`.
    ///
    /// Returns `None` when `side` does not bound this edge.
    pub fn start_for(&self, side: FaceId) -> Option<VertexId> {
        if side == self.left {
            Some(self.start)
        } else if side == self.right {
            Some(self.end)
        } else {
            None
        }
    }

    /// Last vertex of the edge in the boundary order of `side`.
    pub fn end_for(&self, side: FaceId) -> Option<VertexId> {
        if side == self.left {
            Some(self.end)
        } else if side == self.right {
            Some(self.start)
        } else {
            None
        }
    }

    /// The face across the edge from `side`.
    pub fn other_face(&self, side: FaceId) -> Option<FaceId> {
        if side == self.left {
            Some(self.right)
        } else if side == self.right {
            Some(self.left)
        } else {
            None
        }
    }

    /// True when `vertex` is one of the endpoints.
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }
}

// =============================================================================
// FACE
// =============================================================================

/// A convex polygon lying on one bounding plane.
///
/// The boundary is counter-clockwise when viewed from outside the solid;
/// `edges[i]` joins `vertices[i]` and `vertices[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub(crate) plane: Plane,
    pub(crate) origin: FaceOrigin,
    pub(crate) vertices: Vec<VertexId>,
    pub(crate) edges: Vec<EdgeId>,
}

impl Face {
    /// Supporting plane; its normal points out of the solid.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Seed side or clip plane that produced this face.
    pub fn origin(&self) -> FaceOrigin {
        self.origin
    }

    /// Boundary loop vertices in counter-clockwise order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Boundary loop edges; `edges()[i]` follows `vertices()[i]`.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// True when the loop walks directly from `from` to `to`.
    pub fn traverses(&self, from: VertexId, to: VertexId) -> bool {
        let n = self.vertices.len();
        (0..n).any(|i| self.vertices[i] == from && self.vertices[(i + 1) % n] == to)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Topology errors found while assembling or validating a polyhedron.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    #[error("Invalid vertex reference: {0:?}")]
    InvalidVertex(VertexId),

    #[error("Invalid edge reference: {0:?}")]
    InvalidEdge(EdgeId),

    #[error("Invalid face reference: {0:?}")]
    InvalidFace(FaceId),

    #[error("Edge {0:?} starts and ends at the same vertex")]
    ZeroLengthEdge(EdgeId),

    #[error("Edge {0:?} bounds the same face on both sides")]
    SelfAdjacentEdge(EdgeId),

    #[error("Edge {0:?} is bounded by a single face")]
    OpenEdge(EdgeId),

    #[error("Edge between {0:?} and {1:?} is shared by more than two faces or traversed twice in one direction")]
    NonManifoldEdge(VertexId, VertexId),

    #[error("Edge {edge:?} is missing from the loop of face {face:?}")]
    EdgeNotInLoop { edge: EdgeId, face: FaceId },

    #[error("Boundary loop of face {0:?} is not closed")]
    OpenLoop(FaceId),

    #[error("Face {face:?} has {count} vertices, at least 3 are required")]
    TooFewVertices { face: FaceId, count: usize },

    #[error("Vertex {vertex:?} lies {distance} off the plane of face {face:?}")]
    VertexOffPlane {
        vertex: VertexId,
        face: FaceId,
        distance: f64,
    },

    #[error("Boundary loop of face {0:?} is not convex")]
    NonConvexFace(FaceId),

    #[error("Vertex {vertex:?} lies outside the half-space of face {face:?}")]
    VertexOutsideFace { vertex: VertexId, face: FaceId },

    #[error("Vertex {vertex:?} has degree {degree}, at least 3 is required")]
    LowDegreeVertex { vertex: VertexId, degree: usize },

    #[error("Vertex {vertex:?} lists edge {edge:?} which does not end at it")]
    BrokenIncidence { vertex: VertexId, edge: EdgeId },

    #[error("Euler characteristic violated: V={vertices}, E={edges}, F={faces}")]
    EulerCharacteristic {
        vertices: usize,
        edges: usize,
        faces: usize,
    },
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;

/// True when the edge's endpoints sit at `p1` and `p2`, in either order.
pub(crate) fn positions_match(a: Vec3, b: Vec3, p1: Vec3, p2: Vec3, epsilon: f64) -> bool {
    (approx_eq(a, p1, epsilon) && approx_eq(b, p2, epsilon))
        || (approx_eq(a, p2, epsilon) && approx_eq(b, p1, epsilon))
}

#[cfg(test)]
mod tests;
