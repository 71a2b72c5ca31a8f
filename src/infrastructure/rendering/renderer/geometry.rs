use crate::domain::benchmark::PrimitiveKind;
use crate::infrastructure::rendering::gpu_structures::{LineVertex, MeshVertex, ObjectTransform};

/// Vertices in the shared cube mesh (6 faces x 2 triangles)
pub const CUBE_VERTEX_COUNT: u32 = 36;
/// Objects the object buffer is sized for before the first growth
pub const INITIAL_OBJECT_CAPACITY: u64 = 1024;
/// Line segment length relative to the object's half extent
const LINE_LENGTH_FACTOR: f32 = 1.5;

/// Face normal with two tangents such that `u x v = normal`
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
];

/// Unit cube spanning [-1, 1]^3, counter-clockwise seen from outside.
pub fn cube_mesh() -> Vec<MeshVertex> {
    let corner = |n: [f32; 3], u: [f32; 3], v: [f32; 3], su: f32, sv: f32| MeshVertex {
        position: [
            n[0] + su * u[0] + sv * v[0],
            n[1] + su * u[1] + sv * v[1],
            n[2] + su * u[2] + sv * v[2],
        ],
        normal: n,
    };

    CUBE_FACES
        .iter()
        .flat_map(|&(n, u, v)| {
            [
                corner(n, u, v, -1.0, -1.0),
                corner(n, u, v, 1.0, -1.0),
                corner(n, u, v, 1.0, 1.0),
                corner(n, u, v, -1.0, -1.0),
                corner(n, u, v, 1.0, 1.0),
                corner(n, u, v, -1.0, 1.0),
            ]
        })
        .collect()
}

/// Both endpoints of the segment drawn for one object
pub fn line_segment(object: &ObjectTransform) -> [LineVertex; 2] {
    let (sin, cos) = object.phase.sin_cos();
    let reach = object.scale * LINE_LENGTH_FACTOR;
    let dir = [cos * reach, sin * 0.5 * reach, sin * reach];
    let [x, y, z] = object.offset;
    [
        LineVertex { position: [x - dir[0], y - dir[1], z - dir[2]], phase: object.phase, tint: object.tint },
        LineVertex { position: [x + dir[0], y + dir[1], z + dir[2]], phase: object.phase, tint: object.tint },
    ]
}

pub fn line_vertices(objects: &[ObjectTransform]) -> Vec<LineVertex> {
    objects.iter().flat_map(line_segment).collect()
}

/// Lay transforms out `stride` bytes apart for dynamic-offset uniform binding.
pub fn pack_uniform_objects(objects: &[ObjectTransform], stride: u64) -> Vec<u8> {
    let stride = stride as usize;
    let size = std::mem::size_of::<ObjectTransform>();
    debug_assert!(stride >= size);
    let mut bytes = vec![0u8; objects.len() * stride];
    for (slot, object) in bytes.chunks_exact_mut(stride).zip(objects) {
        slot[..size].copy_from_slice(bytemuck::bytes_of(object));
    }
    bytes
}

/// Bytes one object occupies in the object buffer of `primitive`
pub fn bytes_per_object(primitive: PrimitiveKind, uniform_stride: u64) -> u64 {
    match primitive {
        PrimitiveKind::Cubes => uniform_stride,
        PrimitiveKind::InstancedCubes => std::mem::size_of::<ObjectTransform>() as u64,
        PrimitiveKind::Lines => 2 * std::mem::size_of::<LineVertex>() as u64,
    }
}

/// Next buffer size able to hold `required` bytes, doubling from `current`.
pub fn grow_capacity(current: u64, required: u64) -> u64 {
    let mut size = current.max(1);
    while size < required {
        size = size.saturating_mul(2);
    }
    size
}
