use brush_geometry::{
    batch, AddPlaneOutcome, BuildOutcome, Degeneracy, FaceOrigin, KernelConfig, Plane, Polyhedron,
    Vec3,
};

fn plane(normal: Vec3, distance: f64) -> Plane {
    Plane::new(normal, distance).unwrap()
}

fn unit_cube_planes() -> Vec<Plane> {
    vec![
        plane(Vec3::X, 1.0),
        plane(Vec3::NEG_X, 0.0),
        plane(Vec3::Y, 1.0),
        plane(Vec3::NEG_Y, 0.0),
        plane(Vec3::Z, 1.0),
        plane(Vec3::NEG_Z, 0.0),
    ]
}

fn build(planes: &[Plane]) -> BuildOutcome<Polyhedron> {
    Polyhedron::from_planes(planes, &KernelConfig::default()).unwrap()
}

fn counts(solid: &Polyhedron) -> (usize, usize, usize) {
    (solid.vertex_count(), solid.edge_count(), solid.face_count())
}

fn assert_consistent(solid: &Polyhedron) {
    let cfg = KernelConfig::default();
    assert_eq!(solid.euler_characteristic(), 2);
    assert!(solid.is_closed());
    assert!(solid.is_convex(&cfg));
    solid.validate(&cfg).unwrap();
    for (index, edge) in solid.edges().iter().enumerate() {
        assert_ne!(edge.left(), edge.right(), "edge {index} bounds one face twice");
    }
}

#[test]
fn axis_aligned_cube() {
    let cube = build(&unit_cube_planes()).into_solid().unwrap();

    assert_eq!(counts(&cube), (8, 12, 6));
    assert_consistent(&cube);
}

#[test]
fn cube_halved_by_x_plane() {
    let mut planes = unit_cube_planes();
    planes.push(plane(Vec3::X, 0.5));

    let half = build(&planes).into_solid().unwrap();

    assert_eq!(counts(&half), (8, 12, 6));
    assert_consistent(&half);
    assert!(half.face_with_origin(FaceOrigin::Plane(0)).is_none());
    let size = half.bounds().size();
    assert!((size.x - 0.5).abs() < 1e-9);
    assert!((size.y - 1.0).abs() < 1e-9);
    assert!((size.z - 1.0).abs() < 1e-9);
}

#[test]
fn cube_with_truncated_corner() {
    let mut planes = unit_cube_planes();
    // Cuts the origin corner through (0.5,0,0), (0,0.5,0) and (0,0,0.5)
    planes.push(Plane::from_points(
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.5),
        Vec3::new(0.0, 0.5, 0.0),
    )
    .unwrap());

    let solid = build(&planes).into_solid().unwrap();

    assert_eq!(counts(&solid), (10, 15, 7));
    assert_consistent(&solid);
}

#[test]
fn corner_plane_through_cube_vertices() {
    let mut planes = unit_cube_planes();
    // Through (1,0,0), (0,1,0) and (0,0,1), removing the origin corner
    planes.push(Plane::from_points(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 0.0),
    )
    .unwrap());

    let solid = build(&planes).into_solid().unwrap();

    assert_eq!(counts(&solid), (7, 12, 7));
    assert_consistent(&solid);
    assert!((solid.volume() - 5.0 / 6.0).abs() < 1e-9);
}

#[test]
fn single_plane_is_degenerate() {
    assert_eq!(
        build(&[plane(Vec3::new(0.2, 1.0, -0.3), 4.0)]),
        BuildOutcome::Degenerate(Degeneracy::Unbounded)
    );
}

#[test]
fn opposing_disjoint_half_spaces_are_empty() {
    let planes = [plane(Vec3::X, 0.0), plane(Vec3::NEG_X, -1.0)];

    assert_eq!(build(&planes), BuildOutcome::Empty);
}

#[test]
fn every_permutation_of_a_prism_agrees() {
    let planes = vec![
        plane(Vec3::NEG_X, 0.0),
        plane(Vec3::NEG_Y, 0.0),
        plane(Vec3::new(1.0, 1.0, 0.0), 1.0),
        plane(Vec3::Z, 2.0),
        plane(Vec3::NEG_Z, 0.0),
    ];
    let reference = build(&planes).into_solid().unwrap();
    assert_eq!(counts(&reference), (6, 9, 5));

    let mut rotated = planes.clone();
    for _ in 0..planes.len() {
        rotated.rotate_left(1);
        let solid = build(&rotated).into_solid().unwrap();
        assert_eq!(counts(&solid), counts(&reference));
        assert!((solid.volume() - reference.volume()).abs() < 1e-9);
        for vertex in solid.vertices() {
            assert!(reference.find_vertex(vertex.position(), 1e-9).is_some());
        }
    }
}

#[test]
fn batch_build_matches_sequential_build() {
    let mut truncated = unit_cube_planes();
    truncated.push(plane(-Vec3::ONE, -0.5));
    let sets = vec![unit_cube_planes(), truncated, vec![plane(Vec3::Y, 0.0)]];

    let results = batch::build_all(&sets, &KernelConfig::default());

    for (set, result) in sets.iter().zip(results) {
        assert_eq!(result.unwrap(), build(set));
    }
}

#[test]
fn volume_shrinks_monotonically_while_cutting() {
    let cfg = KernelConfig::default();
    let mut solid = build(&unit_cube_planes()).into_solid().unwrap();
    let center = Vec3::splat(0.5);
    let count = 48;

    let mut volume = solid.volume();
    let mut clipped = 0;
    for i in 0..count {
        // Planes tangent to a sphere inside the cube, spread by a golden spiral
        let z = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
        let r = (1.0 - z * z).sqrt();
        let phi = i as f64 * 2.399_963_229_728_653;
        let normal = Vec3::new(r * phi.cos(), r * phi.sin(), z);
        let cut = plane(normal, normal.dot(center) + 0.45);

        let outcome = solid.add_plane(cut, &cfg).unwrap();

        let next = solid.volume();
        assert!(next <= volume + 1e-12, "volume grew at plane {i}");
        match outcome {
            AddPlaneOutcome::Clipped => clipped += 1,
            AddPlaneOutcome::Unchanged => assert!((next - volume).abs() < 1e-12),
            other => panic!("unexpected outcome {other:?} at plane {i}"),
        }
        assert_consistent(&solid);
        volume = next;
    }

    assert!(clipped > 0);
    let sphere = 4.0 / 3.0 * std::f64::consts::PI * 0.45f64.powi(3);
    assert!(volume > sphere);
}
