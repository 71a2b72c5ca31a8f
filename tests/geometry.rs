use primitive_bench_wasm::domain::benchmark::PrimitiveKind;
use primitive_bench_wasm::infrastructure::rendering::{
    FrameUniforms, LineVertex, ObjectTransform, align_to,
    renderer::{
        CUBE_VERTEX_COUNT, bytes_per_object, cube_mesh, grow_capacity, line_segment, line_vertices,
        pack_uniform_objects,
    },
};

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[1] * b[2] - a[2] * b[1], a[2] * b[0] - a[0] * b[2], a[0] * b[1] - a[1] * b[0]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn sample_object(phase: f32) -> ObjectTransform {
    ObjectTransform::new([0.25, -0.5, 0.75], 0.1, [0.5, 0.6, 0.7, 1.0], phase)
}

#[test]
fn cube_mesh_has_twelve_triangles() {
    let mesh = cube_mesh();
    assert_eq!(mesh.len() as u32, CUBE_VERTEX_COUNT);
    assert!(mesh.iter().all(|v| v.position.iter().all(|c| c.abs() == 1.0)));
}

#[test]
fn cube_faces_wind_counter_clockwise_outward() {
    for tri in cube_mesh().chunks_exact(3) {
        let normal = cross(sub(tri[1].position, tri[0].position), sub(tri[2].position, tri[0].position));
        assert!(dot(normal, tri[0].normal) > 0.0, "{:?}", tri);
        // every vertex lies on its face plane
        assert!(tri.iter().all(|v| dot(v.position, v.normal) == 1.0));
    }
}

#[test]
fn line_segment_is_centered_on_object() {
    let object = sample_object(1.1);
    let [a, b] = line_segment(&object);
    for axis in 0..3 {
        let mid = (a.position[axis] + b.position[axis]) / 2.0;
        assert!((mid - object.offset[axis]).abs() < 1e-6);
    }
    assert_eq!(a.tint, object.tint);
    assert_eq!(b.phase, object.phase);
    assert_ne!(a.position, b.position);
}

#[test]
fn two_line_vertices_per_object() {
    let objects: Vec<_> = (0..5).map(|i| sample_object(i as f32)).collect();
    assert_eq!(line_vertices(&objects).len(), 10);
    assert_eq!(
        bytes_per_object(PrimitiveKind::Lines, 256),
        2 * std::mem::size_of::<LineVertex>() as u64
    );
}

#[test]
fn uniform_packing_respects_stride() {
    let objects = [sample_object(0.0), sample_object(2.0)];
    let bytes = pack_uniform_objects(&objects, 256);
    assert_eq!(bytes.len(), 512);

    let size = std::mem::size_of::<ObjectTransform>();
    assert_eq!(&bytes[256..256 + size], bytemuck::bytes_of(&objects[1]));
    assert!(bytes[size..256].iter().all(|b| *b == 0));
}

#[test]
fn object_transform_matches_shader_layout() {
    assert_eq!(std::mem::size_of::<ObjectTransform>(), 48);
    assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
    assert_eq!(bytes_per_object(PrimitiveKind::InstancedCubes, 256), 48);
    assert_eq!(bytes_per_object(PrimitiveKind::Cubes, 256), 256);
}

#[test]
fn buffer_growth_doubles() {
    assert_eq!(grow_capacity(1024, 100), 1024);
    assert_eq!(grow_capacity(1024, 1025), 2048);
    assert_eq!(grow_capacity(1024, 5000), 8192);
    assert_eq!(grow_capacity(0, 3), 4);
}

#[test]
fn alignment_rounds_up() {
    assert_eq!(align_to(48, 256), 256);
    assert_eq!(align_to(256, 256), 256);
    assert_eq!(align_to(257, 256), 512);
    assert_eq!(align_to(0, 64), 0);
}

#[test]
fn aspect_ratio_tolerates_zero_height() {
    assert_eq!(FrameUniforms::new(800, 400, 0.0).aspect, 2.0);
    assert_eq!(FrameUniforms::new(800, 0, 0.0).aspect, 1.0);
}
