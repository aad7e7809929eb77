//! # Half-space Clipper
//!
//! Intersects a convex polyhedron with one half-space.
//!
//! ## Algorithm
//!
//! 1. Classify every vertex as inside, on the plane or outside; anything
//!    within the weld band of the plane counts as on it
//! 2. Clip each face loop Sutherland-Hodgman style, inserting one shared
//!    intersection vertex per crossing edge (welded to any cap vertex within
//!    tolerance)
//! 3. Order the vertices on the clip plane by angle around their center to
//!    form the cap face
//! 4. Repair: drop vertices shared by fewer than 3 loops and loops left with
//!    fewer than 3 vertices
//! 5. Re-derive edges and incidence from the loops and validate
//!
//! The input polyhedron is never modified; a clipped result is a fresh arena.

use std::collections::HashMap;

use tracing::{debug, error, trace};

use crate::config::KernelConfig;
use crate::core::plane::{Plane, PointStatus};
use crate::core::vec3::{approx_eq, average, Vec3};
use crate::error::{BrushError, BrushResult};
use crate::polyhedron::{FaceLoop, Polyhedron};
use crate::topology::{Face, FaceOrigin, VertexId};

/// Result of clipping a polyhedron by one half-space.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipOutcome {
    /// The plane cut through the solid.
    Clipped(Polyhedron),
    /// No vertex lies outside, or the plane matches an existing face.
    Unchanged,
    /// Every vertex lies outside.
    Empty,
    /// No vertex lies strictly inside; only a face, edge or point touches
    /// the half-space.
    Degenerate,
}

/// Clips `solid` by the half-space of `plane`.
///
/// The cap face created on `plane` is tagged with `origin`. A remainder
/// thinner than the weld tolerance counts as [`ClipOutcome::Degenerate`].
///
/// # Errors
///
/// [`BrushError::FatalInconsistency`] when the clipped loops do not form a
/// valid closed convex polyhedron.
pub fn clip(
    solid: &Polyhedron,
    plane: &Plane,
    origin: FaceOrigin,
    cfg: &KernelConfig,
) -> BrushResult<ClipOutcome> {
    if solid
        .faces()
        .iter()
        .any(|face| face.plane().is_equivalent(plane, cfg.point_epsilon))
    {
        debug!(?origin, "clip plane coincides with an existing face");
        return Ok(ClipOutcome::Unchanged);
    }

    // Same band the cap welds with, so no vertex is welded after it was
    // classified off the plane
    let band = cfg.plane_tolerance();
    let statuses: Vec<PointStatus> = solid
        .vertices()
        .iter()
        .map(|v| plane.classify(v.position(), band))
        .collect();
    let count = |status: PointStatus| statuses.iter().filter(|&&s| s == status).count();
    let (inside, on_plane, outside) = (
        count(PointStatus::Inside),
        count(PointStatus::OnPlane),
        count(PointStatus::Outside),
    );
    trace!(inside, on_plane, outside, "classified vertices");

    if outside == 0 {
        return Ok(ClipOutcome::Unchanged);
    }
    if inside == 0 {
        return Ok(if on_plane == 0 {
            ClipOutcome::Empty
        } else {
            ClipOutcome::Degenerate
        });
    }

    let mut builder = LoopBuilder::new(solid, plane, &statuses, cfg.weld_epsilon);
    let mut loops = Vec::with_capacity(solid.face_count() + 1);
    for face in solid.faces() {
        match builder.clip_face(face) {
            Some(vertices) => loops.push(FaceLoop {
                plane: *face.plane(),
                origin: face.origin(),
                vertices,
            }),
            None => trace!(origin = ?face.origin(), "face removed by clip"),
        }
    }

    let cap = builder.cap_loop();
    trace!(cap = cap.len(), faces = loops.len(), "assembling cap face");
    if cap.len() >= 3 {
        loops.push(FaceLoop {
            plane: *plane,
            origin,
            vertices: cap,
        });
    }

    let dropped = repair_loops(&mut loops, builder.positions.len());
    if dropped > 0 {
        trace!(dropped, faces = loops.len(), "repaired degenerate loop vertices");
    }
    if loops.len() < 4 {
        debug!(faces = loops.len(), "clip collapsed the solid");
        return Ok(ClipOutcome::Degenerate);
    }

    match Polyhedron::assemble(builder.positions, loops, solid.planes_applied(), cfg) {
        Ok(clipped) => {
            debug!(
                vertices = clipped.vertex_count(),
                edges = clipped.edge_count(),
                faces = clipped.face_count(),
                "clipped polyhedron"
            );
            Ok(ClipOutcome::Clipped(clipped))
        }
        Err(err) => {
            error!(%err, ?origin, "clip produced inconsistent topology");
            Err(BrushError::FatalInconsistency(err))
        }
    }
}

// =============================================================================
// LOOP BUILDER
// =============================================================================

/// Vertex arena of the clipped solid under construction.
struct LoopBuilder<'a> {
    solid: &'a Polyhedron,
    plane: &'a Plane,
    statuses: &'a [PointStatus],
    weld_epsilon: f64,
    positions: Vec<Vec3>,
    /// Old vertex index to its id in the new arena; `None` when clipped away.
    kept: Vec<Option<VertexId>>,
    /// Intersection vertex of each crossing edge, keyed by sorted endpoints.
    crossings: HashMap<(VertexId, VertexId), VertexId>,
    /// Vertices on the clip plane, in insertion order.
    cap: Vec<VertexId>,
}

impl<'a> LoopBuilder<'a> {
    fn new(
        solid: &'a Polyhedron,
        plane: &'a Plane,
        statuses: &'a [PointStatus],
        weld_epsilon: f64,
    ) -> Self {
        let mut builder = Self {
            solid,
            plane,
            statuses,
            weld_epsilon,
            positions: Vec::with_capacity(solid.vertex_count()),
            kept: vec![None; solid.vertex_count()],
            crossings: HashMap::new(),
            cap: Vec::new(),
        };

        // Kept vertices go in first; on-plane ones seed the cap
        for (index, vertex) in solid.vertices().iter().enumerate() {
            if statuses[index] == PointStatus::Outside {
                continue;
            }
            let id = VertexId(builder.positions.len() as u32);
            builder.positions.push(vertex.position());
            builder.kept[index] = Some(id);
            if statuses[index] == PointStatus::OnPlane {
                builder.cap.push(id);
            }
        }
        builder
    }

    /// Clipped boundary of `face`, or `None` if fewer than 3 vertices remain.
    fn clip_face(&mut self, face: &Face) -> Option<Vec<VertexId>> {
        let ring = face.vertices();
        let mut clipped = Vec::with_capacity(ring.len() + 1);

        for (k, &current) in ring.iter().enumerate() {
            let next = ring[(k + 1) % ring.len()];
            if let Some(id) = self.kept[current.index()] {
                clipped.push(id);
            }
            if self.crosses(current, next) {
                clipped.push(self.intersection(current, next));
            }
        }

        let clipped = simplify_ring(clipped);
        (clipped.len() >= 3).then_some(clipped)
    }

    fn crosses(&self, a: VertexId, b: VertexId) -> bool {
        matches!(
            (self.statuses[a.index()], self.statuses[b.index()]),
            (PointStatus::Inside, PointStatus::Outside) | (PointStatus::Outside, PointStatus::Inside)
        )
    }

    /// Shared intersection vertex of the edge `a`-`b` with the clip plane.
    fn intersection(&mut self, a: VertexId, b: VertexId) -> VertexId {
        let key = (a.min(b), a.max(b));
        if let Some(&id) = self.crossings.get(&key) {
            return id;
        }

        let vertices = self.solid.vertices();
        let from = vertices[key.0.index()].position();
        let to = vertices[key.1.index()].position();
        let d_from = self.plane.signed_distance(from);
        let d_to = self.plane.signed_distance(to);
        let point = from.lerp(to, d_from / (d_from - d_to));

        let id = self.weld(point);
        self.crossings.insert(key, id);
        id
    }

    /// Cap vertex within the weld tolerance of `point`, or a new cap vertex.
    fn weld(&mut self, point: Vec3) -> VertexId {
        let existing = self
            .cap
            .iter()
            .copied()
            .find(|id| approx_eq(self.positions[id.index()], point, self.weld_epsilon));
        if let Some(id) = existing {
            return id;
        }
        let id = VertexId(self.positions.len() as u32);
        self.positions.push(point);
        self.cap.push(id);
        id
    }

    /// Cap vertices ordered counter-clockwise around the clip plane normal.
    ///
    /// Ties in angle fall back to distance from the center, then to
    /// insertion order.
    fn cap_loop(&self) -> Vec<VertexId> {
        let points: Vec<Vec3> = self.cap.iter().map(|id| self.positions[id.index()]).collect();
        let Some(center) = average(&points) else {
            return Vec::new();
        };
        let (u, v) = self.plane.tangent_basis();

        let mut keyed: Vec<(f64, f64, VertexId)> = self
            .cap
            .iter()
            .zip(&points)
            .map(|(&id, &p)| {
                let offset = p - center;
                (offset.dot(v).atan2(offset.dot(u)), offset.length_squared(), id)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        keyed.into_iter().map(|(_, _, id)| id).collect()
    }
}

// =============================================================================
// REPAIR
// =============================================================================

/// Removes vertices referenced by fewer than 3 loops, then loops left with
/// fewer than 3 vertices, until neither remains.
///
/// A vertex shared by only two loops lies on their common edge. Returns the
/// number of vertex references dropped.
fn repair_loops(loops: &mut Vec<FaceLoop>, vertex_count: usize) -> usize {
    let mut dropped = 0;
    loop {
        let before: usize = loops.iter().map(|l| l.vertices.len()).sum();

        let mut valence = vec![0usize; vertex_count];
        for face_loop in loops.iter() {
            for id in &face_loop.vertices {
                valence[id.index()] += 1;
            }
        }
        for face_loop in loops.iter_mut() {
            let ring = std::mem::take(&mut face_loop.vertices);
            face_loop.vertices =
                simplify_ring(ring.into_iter().filter(|id| valence[id.index()] >= 3).collect());
        }
        loops.retain(|l| l.vertices.len() >= 3);

        let after: usize = loops.iter().map(|l| l.vertices.len()).sum();
        if after == before {
            return dropped;
        }
        dropped += before - after;
    }
}

/// Collapses repeated vertices in a cyclic ring.
///
/// Consecutive repeats merge; a vertex visited twice splits the ring and the
/// part with more vertices is kept.
fn simplify_ring(mut ring: Vec<VertexId>) -> Vec<VertexId> {
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    while let Some((i, j)) = first_repeat(&ring) {
        let inner = ring[i..j].to_vec();
        let outer: Vec<VertexId> = ring[j..].iter().chain(&ring[..i]).copied().collect();
        ring = if inner.len() >= outer.len() { inner } else { outer };
    }
    ring
}

fn first_repeat(ring: &[VertexId]) -> Option<(usize, usize)> {
    ring.iter().enumerate().find_map(|(i, id)| {
        ring[i + 1..]
            .iter()
            .position(|other| other == id)
            .map(|k| (i, i + 1 + k))
    })
}
