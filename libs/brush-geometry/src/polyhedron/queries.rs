//! Read-only queries consumed by renderers, exporters and picking.

use config::constants::{approx_zero, MIN_NORMAL_LENGTH};

use crate::config::KernelConfig;
use crate::core::bounds::BoundingBox;
use crate::core::plane::Plane;
use crate::core::vec3::{approx_eq, Vec3};
use crate::polyhedron::Polyhedron;
use crate::topology::{positions_match, EdgeId, FaceId, TopologyResult, VertexId};

/// First point where a ray meets the brush surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin along the normalized direction.
    pub distance: f64,
    /// Hit point.
    pub point: Vec3,
    /// Face that was hit.
    pub face: FaceId,
}

impl Polyhedron {
    /// Ordered boundary positions of a face.
    pub fn face_polygon(&self, id: FaceId) -> TopologyResult<Vec<Vec3>> {
        self.face(id)?
            .vertices()
            .iter()
            .map(|&v| self.vertex(v).map(|vertex| vertex.position()))
            .collect()
    }

    /// Every face as its plane and ordered boundary positions.
    pub fn polygons(&self) -> impl Iterator<Item = (&Plane, Vec<Vec3>)> + '_ {
        self.faces().iter().map(move |face| {
            let ring = face
                .vertices()
                .iter()
                .map(|v| self.vertices()[v.index()].position())
                .collect();
            (face.plane(), ring)
        })
    }

    /// Axis-aligned bounds of all vertices.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices().iter().map(|v| v.position()))
    }

    /// True when `point` lies inside or on the brush.
    pub fn contains_point(&self, point: Vec3, cfg: &KernelConfig) -> bool {
        !self.faces().is_empty()
            && self
                .faces()
                .iter()
                .all(|face| face.plane().signed_distance(point) <= cfg.point_epsilon)
    }

    /// Casts a ray against the face planes.
    ///
    /// A ray starting outside reports the entry point; a ray starting inside
    /// reports the exit point.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3, cfg: &KernelConfig) -> Option<RayHit> {
        let direction = direction.try_normalize()?;
        let mut enter = (f64::NEG_INFINITY, None);
        let mut exit = (f64::INFINITY, None);

        for (index, face) in self.faces().iter().enumerate() {
            let plane = face.plane();
            let denom = plane.normal().dot(direction);
            let distance = plane.signed_distance(origin);
            if approx_zero(denom, MIN_NORMAL_LENGTH) {
                if distance > cfg.point_epsilon {
                    return None;
                }
                continue;
            }
            let t = -distance / denom;
            let face_id = Some(FaceId(index as u32));
            if denom < 0.0 {
                if t > enter.0 {
                    enter = (t, face_id);
                }
            } else if t < exit.0 {
                exit = (t, face_id);
            }
        }

        if enter.0 > exit.0 || exit.0 < 0.0 {
            return None;
        }
        let (distance, face) = if enter.0 >= 0.0 { enter } else { exit };
        Some(RayHit {
            distance,
            point: origin + direction * distance,
            face: face?,
        })
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        let reference = self.reference_point();
        self.tetrahedra(reference).map(|(volume, _)| volume).sum()
    }

    /// Center of mass of the enclosed volume.
    pub fn centroid(&self) -> Option<Vec3> {
        let reference = self.reference_point();
        let (volume, moment) = self
            .tetrahedra(reference)
            .fold((0.0, Vec3::ZERO), |(volume, moment), (v, center)| {
                (volume + v, moment + center * v)
            });
        (volume > 0.0).then(|| moment / volume)
    }

    /// Fan triangulation of every face as a flat coordinate list.
    ///
    /// Each triangle is 9 f64 values (3 vertices * 3 coordinates), wound
    /// counter-clockwise when seen from outside.
    pub fn triangulate(&self) -> Vec<f64> {
        let mut coords = Vec::new();
        for (_, ring) in self.polygons() {
            for k in 1..ring.len().saturating_sub(1) {
                for p in [ring[0], ring[k], ring[k + 1]] {
                    coords.extend_from_slice(&[p.x, p.y, p.z]);
                }
            }
        }
        coords
    }

    /// Edge joining the two vertices, in either direction.
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let vertex = self.vertices().get(a.index())?;
        vertex
            .edges()
            .iter()
            .copied()
            .find(|&e| self.edges()[e.index()].has_vertex(b) && a != b)
    }

    /// Vertex within `epsilon` of `position`.
    pub fn find_vertex(&self, position: Vec3, epsilon: f64) -> Option<VertexId> {
        self.vertices()
            .iter()
            .position(|v| approx_eq(v.position(), position, epsilon))
            .map(|index| VertexId(index as u32))
    }

    /// True when the edge's endpoints sit at `p1` and `p2` in either order.
    pub fn edge_has_positions(
        &self,
        edge: EdgeId,
        p1: Vec3,
        p2: Vec3,
        epsilon: f64,
    ) -> TopologyResult<bool> {
        let edge = self.edge(edge)?;
        let start = self.vertex(edge.start())?.position();
        let end = self.vertex(edge.end())?.position();
        Ok(positions_match(start, end, p1, p2, epsilon))
    }

    /// Faces meeting at a vertex.
    pub fn incident_faces(&self, vertex: VertexId) -> TopologyResult<Vec<FaceId>> {
        let mut faces = Vec::new();
        for &edge in self.vertex(vertex)?.edges() {
            for face in self.edge(edge)?.faces() {
                if !faces.contains(&face) {
                    faces.push(face);
                }
            }
        }
        Ok(faces)
    }

    fn reference_point(&self) -> Vec3 {
        self.bounds().center()
    }

    /// Signed volume and centroid of each fan tetrahedron around `reference`.
    fn tetrahedra(&self, reference: Vec3) -> impl Iterator<Item = (f64, Vec3)> + '_ {
        self.polygons().flat_map(move |(_, ring)| {
            (1..ring.len().saturating_sub(1))
                .map(|k| {
                    let (a, b, c) = (ring[0], ring[k], ring[k + 1]);
                    let volume = (a - reference).dot((b - reference).cross(c - reference)) / 6.0;
                    (volume, (reference + a + b + c) * 0.25)
                })
                .collect::<Vec<_>>()
        })
    }
}
