/// Where an object sits and how big it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: [f32; 3],
    pub half_extent: f32,
    /// Spin phase in radians
    pub phase: f32,
}

/// Object color, RGBA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub [f32; 4]);
