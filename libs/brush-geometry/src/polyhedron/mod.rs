//! # Polyhedron
//!
//! Closed convex solid owning its vertices, edges and faces.
//!
//! ## Structure
//!
//! - `seed`: world-bounds and explicit-box seed solids
//! - `queries`: containment, ray casts, volume and export helpers
//!
//! A polyhedron is only ever produced by [`Polyhedron::assemble`], which
//! derives edges and incidence from face loops and validates the result, so
//! callers never observe an inconsistent solid.

pub mod queries;
pub mod seed;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::clip::{clip, ClipOutcome};
use crate::config::KernelConfig;
use crate::core::plane::Plane;
use crate::core::vec3::{newell_normal, Vec3};
use crate::error::BrushResult;
use crate::topology::{
    Edge, EdgeId, Face, FaceId, FaceOrigin, TopologyError, TopologyResult, Vertex, VertexId,
};

pub use queries::RayHit;
pub use seed::Seed;

// =============================================================================
// OUTCOMES
// =============================================================================

/// Why a plane set does not describe a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// The planes do not close the solid; part of the world seed survives.
    Unbounded,
    /// The intersection is a point, segment or flat polygon.
    Collapsed,
}

/// Result of building a solid from planes.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome<T> {
    /// The planes bound a solid.
    Solid(T),
    /// The half-spaces do not intersect.
    Empty,
    /// The intersection is not a bounded solid.
    Degenerate(Degeneracy),
}

impl<T> BuildOutcome<T> {
    /// The solid, if there is one.
    pub fn into_solid(self) -> Option<T> {
        match self {
            BuildOutcome::Solid(solid) => Some(solid),
            BuildOutcome::Empty | BuildOutcome::Degenerate(_) => None,
        }
    }

    /// True for [`BuildOutcome::Solid`].
    pub fn is_solid(&self) -> bool {
        matches!(self, BuildOutcome::Solid(_))
    }
}

/// Result of clipping a polyhedron in place by one more plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPlaneOutcome {
    /// The plane cut the solid; it was replaced by the clipped solid.
    Clipped,
    /// The plane is redundant; the solid is untouched.
    Unchanged,
    /// Nothing remains; the solid is untouched.
    Empty,
    /// Only a lower-dimensional remainder; the solid is untouched.
    Degenerate(Degeneracy),
}

// =============================================================================
// POLYHEDRON
// =============================================================================

/// Face boundary handed to [`Polyhedron::assemble`].
#[derive(Debug, Clone)]
pub(crate) struct FaceLoop {
    pub plane: Plane,
    pub origin: FaceOrigin,
    pub vertices: Vec<VertexId>,
}

/// Closed convex polyhedron with index-based adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    planes_applied: usize,
}

impl Polyhedron {
    /// Builds the solid bounded by `planes`, seeded by the world bounds.
    ///
    /// Returns [`Degeneracy::Unbounded`] when the planes leave any side of the
    /// world seed in place.
    pub fn from_planes(planes: &[Plane], cfg: &KernelConfig) -> BrushResult<BuildOutcome<Self>> {
        Self::from_planes_with_seed(planes, &Seed::WorldBounds, cfg)
    }

    /// Builds the solid bounded by `planes` inside the given seed.
    ///
    /// Planes are folded in order; each face remembers the index of the plane
    /// that produced it.
    pub fn from_planes_with_seed(
        planes: &[Plane],
        seed: &Seed,
        cfg: &KernelConfig,
    ) -> BrushResult<BuildOutcome<Self>> {
        let mut solid = seed.build(cfg)?;

        for (index, plane) in planes.iter().enumerate() {
            match solid.add_plane(*plane, cfg)? {
                AddPlaneOutcome::Clipped | AddPlaneOutcome::Unchanged => {}
                AddPlaneOutcome::Empty => {
                    debug!(index, "plane set has an empty intersection");
                    return Ok(BuildOutcome::Empty);
                }
                AddPlaneOutcome::Degenerate(degeneracy) => {
                    debug!(index, ?degeneracy, "plane set collapses");
                    return Ok(BuildOutcome::Degenerate(degeneracy));
                }
            }
        }

        if !seed.is_boundary() && solid.has_seed_faces() {
            warn!(planes = planes.len(), "plane set does not bound a solid");
            return Ok(BuildOutcome::Degenerate(Degeneracy::Unbounded));
        }

        Ok(BuildOutcome::Solid(solid))
    }

    /// Clips the solid by one more half-space.
    ///
    /// On [`AddPlaneOutcome::Empty`] and [`AddPlaneOutcome::Degenerate`] the
    /// solid keeps its previous geometry.
    pub fn add_plane(&mut self, plane: Plane, cfg: &KernelConfig) -> BrushResult<AddPlaneOutcome> {
        let origin = FaceOrigin::Plane(self.planes_applied);
        match clip(self, &plane, origin, cfg)? {
            ClipOutcome::Clipped(mut clipped) => {
                clipped.planes_applied = self.planes_applied + 1;
                *self = clipped;
                Ok(AddPlaneOutcome::Clipped)
            }
            ClipOutcome::Unchanged => {
                self.planes_applied += 1;
                Ok(AddPlaneOutcome::Unchanged)
            }
            ClipOutcome::Empty => Ok(AddPlaneOutcome::Empty),
            ClipOutcome::Degenerate => Ok(AddPlaneOutcome::Degenerate(Degeneracy::Collapsed)),
        }
    }

    /// Builds a polyhedron from face loops over `positions`.
    ///
    /// Unreferenced positions are dropped, edges are derived from consecutive
    /// loop vertices, and the result is validated before it is returned.
    pub(crate) fn assemble(
        positions: Vec<Vec3>,
        loops: Vec<FaceLoop>,
        planes_applied: usize,
        cfg: &KernelConfig,
    ) -> TopologyResult<Self> {
        // Compact vertices to the ones the loops reference
        let mut remap: Vec<Option<VertexId>> = vec![None; positions.len()];
        let mut vertices = Vec::with_capacity(positions.len());
        for face_loop in &loops {
            for &id in &face_loop.vertices {
                let position = *positions
                    .get(id.index())
                    .ok_or(TopologyError::InvalidVertex(id))?;
                if remap[id.index()].is_none() {
                    remap[id.index()] = Some(VertexId(vertices.len() as u32));
                    vertices.push(Vertex::new(position));
                }
            }
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut right_sides: Vec<bool> = Vec::new();
        let mut edge_map: HashMap<(VertexId, VertexId), EdgeId> = HashMap::new();
        let mut faces = Vec::with_capacity(loops.len());

        for (index, face_loop) in loops.into_iter().enumerate() {
            let face_id = FaceId(index as u32);
            let ring: Vec<VertexId> = face_loop
                .vertices
                .iter()
                .filter_map(|id| remap[id.index()])
                .collect();
            if ring.len() < 3 {
                return Err(TopologyError::TooFewVertices {
                    face: face_id,
                    count: ring.len(),
                });
            }

            let mut face_edges = Vec::with_capacity(ring.len());
            for (k, &from) in ring.iter().enumerate() {
                let to = ring[(k + 1) % ring.len()];
                if from == to {
                    return Err(TopologyError::OpenLoop(face_id));
                }
                let key = (from.min(to), from.max(to));
                let edge_id = match edge_map.get(&key) {
                    None => {
                        let edge_id = EdgeId(edges.len() as u32);
                        edges.push(Edge {
                            start: from,
                            end: to,
                            left: face_id,
                            right: face_id,
                        });
                        right_sides.push(false);
                        edge_map.insert(key, edge_id);
                        edge_id
                    }
                    Some(&edge_id) => {
                        let edge = &mut edges[edge_id.index()];
                        if right_sides[edge_id.index()] || edge.start != to || edge.end != from {
                            return Err(TopologyError::NonManifoldEdge(from, to));
                        }
                        edge.right = face_id;
                        right_sides[edge_id.index()] = true;
                        edge_id
                    }
                };
                face_edges.push(edge_id);
            }

            faces.push(Face {
                plane: face_loop.plane,
                origin: face_loop.origin,
                vertices: ring,
                edges: face_edges,
            });
        }

        if let Some(open) = right_sides.iter().position(|paired| !paired) {
            return Err(TopologyError::OpenEdge(EdgeId(open as u32)));
        }

        for (index, edge) in edges.iter().enumerate() {
            let edge_id = EdgeId(index as u32);
            vertices[edge.start.index()].edges.push(edge_id);
            vertices[edge.end.index()].edges.push(edge_id);
        }

        let solid = Self {
            vertices,
            edges,
            faces,
            planes_applied,
        };
        solid.validate(cfg)?;
        Ok(solid)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// All vertices; a vertex's index is its [`VertexId`].
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges; an edge's index is its [`EdgeId`].
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All faces; a face's index is its [`FaceId`].
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Gets a vertex by ID
    pub fn vertex(&self, id: VertexId) -> TopologyResult<&Vertex> {
        self.vertices
            .get(id.index())
            .ok_or(TopologyError::InvalidVertex(id))
    }

    /// Gets an edge by ID
    pub fn edge(&self, id: EdgeId) -> TopologyResult<&Edge> {
        self.edges.get(id.index()).ok_or(TopologyError::InvalidEdge(id))
    }

    /// Gets a face by ID
    pub fn face(&self, id: FaceId) -> TopologyResult<&Face> {
        self.faces.get(id.index()).ok_or(TopologyError::InvalidFace(id))
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of planes folded in so far, redundant ones included.
    pub fn planes_applied(&self) -> usize {
        self.planes_applied
    }

    /// True while any side of the seed box is still part of the surface.
    pub fn has_seed_faces(&self) -> bool {
        self.faces.iter().any(|face| face.origin == FaceOrigin::Seed)
    }

    /// The face produced by the given plane, if it survived.
    pub fn face_with_origin(&self, origin: FaceOrigin) -> Option<FaceId> {
        self.faces
            .iter()
            .position(|face| face.origin == origin)
            .map(|index| FaceId(index as u32))
    }

    // =========================================================================
    // CONSISTENCY
    // =========================================================================

    /// `V - E + F`; equals 2 for every valid polyhedron.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edges.len() as i64 + self.faces.len() as i64
    }

    /// Checks every adjacency and geometric invariant.
    pub fn validate(&self, cfg: &KernelConfig) -> TopologyResult<()> {
        self.check_closed()?;
        self.check_incidence()?;
        self.check_convex(cfg)?;
        self.check_euler()
    }

    /// True when every edge is shared by two distinct faces whose loops
    /// close and traverse it in opposite directions.
    pub fn is_closed(&self) -> bool {
        self.check_closed().is_ok()
    }

    /// True when the solid is closed, its faces are planar convex loops and
    /// every vertex lies inside every face's half-space.
    pub fn is_convex(&self, cfg: &KernelConfig) -> bool {
        self.check_closed().is_ok() && self.check_convex(cfg).is_ok()
    }

    fn check_closed(&self) -> TopologyResult<()> {
        for (index, edge) in self.edges.iter().enumerate() {
            let edge_id = EdgeId(index as u32);
            self.vertex(edge.start)?;
            self.vertex(edge.end)?;
            if edge.start == edge.end {
                return Err(TopologyError::ZeroLengthEdge(edge_id));
            }
            if edge.left == edge.right {
                return Err(TopologyError::SelfAdjacentEdge(edge_id));
            }
            let left = self.face(edge.left)?;
            if !left.traverses(edge.start, edge.end) || !left.edges.contains(&edge_id) {
                return Err(TopologyError::EdgeNotInLoop {
                    edge: edge_id,
                    face: edge.left,
                });
            }
            let right = self.face(edge.right)?;
            if !right.traverses(edge.end, edge.start) || !right.edges.contains(&edge_id) {
                return Err(TopologyError::EdgeNotInLoop {
                    edge: edge_id,
                    face: edge.right,
                });
            }
        }

        for (index, face) in self.faces.iter().enumerate() {
            let face_id = FaceId(index as u32);
            let count = face.vertices.len();
            if count < 3 {
                return Err(TopologyError::TooFewVertices {
                    face: face_id,
                    count,
                });
            }
            if face.edges.len() != count {
                return Err(TopologyError::OpenLoop(face_id));
            }
            for (k, &edge_id) in face.edges.iter().enumerate() {
                let edge = self.edge(edge_id)?;
                let from = face.vertices[k];
                let to = face.vertices[(k + 1) % count];
                if edge.start_for(face_id) != Some(from) || edge.end_for(face_id) != Some(to) {
                    return Err(TopologyError::OpenLoop(face_id));
                }
            }
        }

        Ok(())
    }

    fn check_incidence(&self) -> TopologyResult<()> {
        for (index, vertex) in self.vertices.iter().enumerate() {
            let vertex_id = VertexId(index as u32);
            if vertex.degree() < 3 {
                return Err(TopologyError::LowDegreeVertex {
                    vertex: vertex_id,
                    degree: vertex.degree(),
                });
            }
            for &edge_id in &vertex.edges {
                if !self.edge(edge_id)?.has_vertex(vertex_id) {
                    return Err(TopologyError::BrokenIncidence {
                        vertex: vertex_id,
                        edge: edge_id,
                    });
                }
            }
        }

        for (index, edge) in self.edges.iter().enumerate() {
            let edge_id = EdgeId(index as u32);
            for vertex_id in edge.vertices() {
                if !self.vertex(vertex_id)?.edges.contains(&edge_id) {
                    return Err(TopologyError::BrokenIncidence {
                        vertex: vertex_id,
                        edge: edge_id,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_convex(&self, cfg: &KernelConfig) -> TopologyResult<()> {
        let tolerance = cfg.plane_tolerance();

        for (index, face) in self.faces.iter().enumerate() {
            let face_id = FaceId(index as u32);
            let plane = face.plane;
            let ring = face
                .vertices
                .iter()
                .map(|&id| self.vertex(id).map(|v| v.position))
                .collect::<TopologyResult<Vec<Vec3>>>()?;

            for (&vertex, &position) in face.vertices.iter().zip(&ring) {
                let distance = plane.signed_distance(position);
                if distance.abs() > tolerance {
                    return Err(TopologyError::VertexOffPlane {
                        vertex,
                        face: face_id,
                        distance,
                    });
                }
            }

            if newell_normal(&ring).dot(plane.normal()) <= 0.0 {
                return Err(TopologyError::NonConvexFace(face_id));
            }

            // Every loop vertex must sit on the inner side of every loop edge
            for (k, &a) in ring.iter().enumerate() {
                let b = ring[(k + 1) % ring.len()];
                let inward = plane.normal().cross(b - a).try_normalize();
                let Some(inward) = inward else {
                    return Err(TopologyError::ZeroLengthEdge(face.edges[k]));
                };
                if ring.iter().any(|&p| (p - a).dot(inward) < -tolerance) {
                    return Err(TopologyError::NonConvexFace(face_id));
                }
            }

            for (vertex_index, vertex) in self.vertices.iter().enumerate() {
                if plane.signed_distance(vertex.position) > tolerance {
                    return Err(TopologyError::VertexOutsideFace {
                        vertex: VertexId(vertex_index as u32),
                        face: face_id,
                    });
                }
            }
        }

        Ok(())
    }

    fn check_euler(&self) -> TopologyResult<()> {
        if self.euler_characteristic() != 2 {
            return Err(TopologyError::EulerCharacteristic {
                vertices: self.vertices.len(),
                edges: self.edges.len(),
                faces: self.faces.len(),
            });
        }
        Ok(())
    }
}
