//! Tests for the arena element types.

use super::*;

fn edge() -> Edge {
    Edge {
        start: VertexId(0),
        end: VertexId(1),
        left: FaceId(2),
        right: FaceId(3),
    }
}

#[test]
fn test_vertex_creation() {
    let pos = Vec3::new(1.0, 2.0, 3.0);
    let vertex = Vertex::new(pos);

    assert_eq!(vertex.position(), pos);
    assert!(vertex.edges().is_empty());
    assert_eq!(vertex.degree(), 0);
}

#[test]
fn test_edge_endpoints_follow_side() {
    let e = edge();

    assert_eq!(e.start_for(FaceId(2)), Some(VertexId(0)));
    assert_eq!(e.end_for(FaceId(2)), Some(VertexId(1)));
    assert_eq!(e.start_for(FaceId(3)), Some(VertexId(1)));
    assert_eq!(e.end_for(FaceId(3)), Some(VertexId(0)));
    assert_eq!(e.start_for(FaceId(9)), None);
}

#[test]
fn test_edge_other_face() {
    let e = edge();

    assert_eq!(e.other_face(FaceId(2)), Some(FaceId(3)));
    assert_eq!(e.other_face(FaceId(3)), Some(FaceId(2)));
    assert_eq!(e.other_face(FaceId(0)), None);
    assert!(e.has_vertex(VertexId(1)));
    assert!(!e.has_vertex(VertexId(2)));
}

#[test]
fn test_face_traverses() {
    let face = Face {
        plane: Plane::new(Vec3::Z, 0.0).unwrap(),
        origin: FaceOrigin::Plane(0),
        vertices: vec![VertexId(0), VertexId(1), VertexId(2)],
        edges: vec![EdgeId(0), EdgeId(1), EdgeId(2)],
    };

    assert!(face.traverses(VertexId(0), VertexId(1)));
    assert!(face.traverses(VertexId(2), VertexId(0)));
    assert!(!face.traverses(VertexId(1), VertexId(0)));
}

#[test]
fn test_positions_match_either_order() {
    let a = Vec3::ZERO;
    let b = Vec3::X;

    assert!(positions_match(a, b, Vec3::X, Vec3::ZERO, 1e-6));
    assert!(positions_match(a, b, Vec3::new(1e-9, 0.0, 0.0), Vec3::X, 1e-6));
    assert!(!positions_match(a, b, Vec3::Y, Vec3::X, 1e-6));
}

#[test]
fn test_topology_error_display() {
    let error = TopologyError::InvalidVertex(VertexId(42));
    assert_eq!(error.to_string(), "Invalid vertex reference: VertexId(42)");

    let euler = TopologyError::EulerCharacteristic {
        vertices: 8,
        edges: 11,
        faces: 6,
    };
    assert!(euler.to_string().contains("E=11"));
}
