use bytemuck::{Pod, Zeroable};

/// Corner of the shared cube mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Per-object placement. Used three ways: as instance data for instanced
/// cubes, as a dynamic-offset uniform for separate cubes, and as the source
/// of line segment endpoints.
///
/// Layout matches the WGSL `ObjectData` struct (48 bytes, 16 byte aligned).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ObjectTransform {
    /// Center in world units
    pub offset: [f32; 3],
    /// Half extent of the cube / half length of the line
    pub scale: f32,
    /// RGBA
    pub tint: [f32; 4],
    /// Spin phase in radians
    pub phase: f32,
    pub _padding: [f32; 3],
}

impl ObjectTransform {
    pub fn new(offset: [f32; 3], scale: f32, tint: [f32; 4], phase: f32) -> Self {
        Self { offset, scale, tint, phase, _padding: [0.0; 3] }
    }

    const INSTANCE_ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x3,
        3 => Float32,
        4 => Float32x4,
        5 => Float32,
    ];

    /// Instance buffer layout
    pub fn instance_desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ObjectTransform>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::INSTANCE_ATTRIBS,
        }
    }
}

/// Endpoint of a line segment
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub phase: f32,
    pub tint: [f32; 4],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32,
        2 => Float32x4,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Per-frame uniforms shared by every pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Viewport width / height
    pub aspect: f32,
    /// Milliseconds since the renderer was created
    pub time_ms: f32,
    pub _padding: [f32; 2],
}

impl FrameUniforms {
    pub fn new(width: u32, height: u32, time_ms: f32) -> Self {
        let aspect = if height == 0 { 1.0 } else { width as f32 / height as f32 };
        Self { aspect, time_ms, _padding: [0.0; 2] }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(1, 1, 0.0)
    }
}

/// Round `size` up to the next multiple of `alignment` (a power of two).
pub fn align_to(size: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (size + alignment - 1) & !(alignment - 1)
}
