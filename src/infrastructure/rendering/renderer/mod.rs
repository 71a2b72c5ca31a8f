//! wgpu renderer drawing the benchmark population.
//!
//! One renderer serves one backend/primitive pair. It owns the surface, a
//! single pipeline and the object buffer that holds the current population.
//! The active renderer is kept behind a global handle so the resize handler
//! and the idle presenter can reach it.

use crate::domain::benchmark::{Backend, PrimitiveKind};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::rendering::gpu_structures::{FrameUniforms, ObjectTransform};
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static GLOBAL_RENDERER: RefCell<Option<Rc<RefCell<BenchRenderer>>>> = const { RefCell::new(None) };
}

/// Store the active renderer instance, replacing the previous one
pub fn set_global_renderer(renderer: Rc<RefCell<BenchRenderer>>) {
    GLOBAL_RENDERER.with(|cell| {
        *cell.borrow_mut() = Some(renderer);
    });
}

/// Whether `renderer` is still the active one
pub fn is_global_renderer(renderer: &Rc<RefCell<BenchRenderer>>) -> bool {
    GLOBAL_RENDERER.with(|cell| cell.borrow().as_ref().is_some_and(|rc| Rc::ptr_eq(rc, renderer)))
}

/// Run `f` against the active renderer, if any
pub fn with_global_renderer<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut BenchRenderer) -> R,
{
    GLOBAL_RENDERER.with(|cell| {
        let opt = cell.borrow();
        opt.as_ref().map(|rc| f(&mut rc.borrow_mut()))
    })
}

pub struct BenchRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    backend: Backend,
    primitive: PrimitiveKind,

    // WGPU state
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // Pipeline for `primitive`
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    /// Cube mesh, absent for lines
    mesh_buffer: Option<wgpu::Buffer>,
    /// Dynamic-offset layout, only for separate cubes
    object_layout: Option<wgpu::BindGroupLayout>,
    object_bind_group: Option<wgpu::BindGroup>,
    object_buffer: wgpu::Buffer,
    object_stride: u64,
    object_count: u32,

    // ⏱️ Animation clock origin
    started_at_ms: f64,
}

mod geometry;
pub use geometry::{
    CUBE_VERTEX_COUNT, INITIAL_OBJECT_CAPACITY, bytes_per_object, cube_mesh, grow_capacity,
    line_segment, line_vertices, pack_uniform_objects,
};
mod initialization;
mod performance;
mod render_loop;
pub(crate) use performance::render_logged;
pub use performance::{keep_presenting, measure_frames};

impl BenchRenderer {
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn primitive(&self) -> PrimitiveKind {
        self.primitive
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Objects drawn by the next frame
    pub fn object_count(&self) -> u32 {
        self.object_count
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.width = new_width;
            self.height = new_height;
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);

            get_logger().debug(
                LogComponent::Infrastructure("BenchRenderer"),
                &format!("📐 Resized to {}x{}", new_width, new_height),
            );
        }
    }

    fn frame_uniforms(&self, now_ms: f64) -> FrameUniforms {
        FrameUniforms::new(self.width, self.height, (now_ms - self.started_at_ms) as f32)
    }

    fn object_size() -> u64 {
        std::mem::size_of::<ObjectTransform>() as u64
    }
}
