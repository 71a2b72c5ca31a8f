use super::*;
use crate::domain::errors::{BenchmarkError, BenchmarkResult};
use crate::infrastructure::frame_clock::now_ms;
use crate::infrastructure::rendering::gpu_structures::{LineVertex, MeshVertex, align_to};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use wgpu::util::DeviceExt;

const COMMON_WGSL: &str = include_str!("../../../shaders/common.wgsl");
const CUBE_WGSL: &str = include_str!("../../../shaders/cube.wgsl");
const CUBE_INSTANCED_WGSL: &str = include_str!("../../../shaders/cube_instanced.wgsl");
const LINE_WGSL: &str = include_str!("../../../shaders/line.wgsl");

/// Reported once by the driver, not here.
fn init_error(message: impl Into<String>) -> BenchmarkError {
    BenchmarkError::BackendInit(message.into())
}

#[cfg(target_arch = "wasm32")]
fn canvas_surface(
    instance: &wgpu::Instance,
    canvas: &HtmlCanvasElement,
) -> BenchmarkResult<wgpu::Surface<'static>> {
    instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| init_error(format!("Failed to create surface: {}", e)))
}

/// Canvas surfaces only exist in the browser; native builds run the logic tests.
#[cfg(not(target_arch = "wasm32"))]
fn canvas_surface(
    _instance: &wgpu::Instance,
    _canvas: &HtmlCanvasElement,
) -> BenchmarkResult<wgpu::Surface<'static>> {
    Err(init_error("Canvas surfaces require a wasm32 browser build"))
}

/// Swap `canvas` for an identical node without a drawing context.
///
/// A canvas keeps the first context type requested from it, so a WebGL run
/// after a WebGPU run on the same element would fail to create its surface.
fn fresh_canvas(canvas: HtmlCanvasElement) -> BenchmarkResult<HtmlCanvasElement> {
    let fresh = canvas
        .clone_node()
        .map_err(|e| init_error(format!("Failed to clone canvas: {:?}", e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| init_error("Cloned canvas is not a canvas"))?;
    canvas
        .replace_with_with_node_1(&fresh)
        .map_err(|e| init_error(format!("Failed to replace canvas: {:?}", e)))?;
    Ok(fresh)
}

impl BenchRenderer {
    pub async fn is_webgpu_supported() -> bool {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            js_sys::Reflect::has(&navigator, &"gpu".into()).unwrap_or(false)
        } else {
            false
        }
    }

    /// Set up `backend` on the canvas `canvas_id` for drawing `primitive`.
    ///
    /// The canvas keeps its CSS size; its drawing buffer is matched to it.
    pub async fn new(
        canvas_id: &str,
        backend: Backend,
        primitive: PrimitiveKind,
    ) -> BenchmarkResult<Self> {
        let canvas = document()
            .get_element_by_id(canvas_id)
            .ok_or_else(|| init_error(format!("Canvas with id '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| init_error(format!("Element '{}' is not a canvas", canvas_id)))?;
        let canvas = fresh_canvas(canvas)?;

        let width = if canvas.client_width() > 0 { canvas.client_width() as u32 } else { canvas.width() };
        let height =
            if canvas.client_height() > 0 { canvas.client_height() as u32 } else { canvas.height() };
        let (width, height) = (width.max(1), height.max(1));
        canvas.set_width(width);
        canvas.set_height(height);

        get_logger().info(
            LogComponent::Infrastructure("BenchRenderer"),
            &format!("🎯 Canvas '{}' configured: {}x{} ({} {})", canvas_id, width, height, backend, primitive),
        );

        let backends = match backend {
            Backend::WebGpu => {
                if !Self::is_webgpu_supported().await {
                    return Err(init_error("WebGPU not supported in this browser"));
                }
                wgpu::Backends::BROWSER_WEBGPU
            }
            Backend::WebGl => wgpu::Backends::GL,
        };

        let instance =
            wgpu::Instance::new(&wgpu::InstanceDescriptor { backends, ..Default::default() });

        let surface = canvas_surface(&instance, &canvas)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| init_error(format!("Failed to find adapter: {:?}", e)))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Bench Device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| init_error(format!("Failed to create device: {:?}", e)))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| init_error("Surface reports no texture formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniforms"),
            contents: bytemuck::bytes_of(&FrameUniforms::new(width, height, 0.0)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: frame_buffer.as_entire_binding() }],
        });

        let object_layout = (primitive == PrimitiveKind::Cubes).then(|| {
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("object_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(Self::object_size()),
                    },
                    count: None,
                }],
            })
        });

        let pipeline = Self::build_pipeline(
            &device,
            config.format,
            primitive,
            &frame_layout,
            object_layout.as_ref(),
        );

        let mesh_buffer = (primitive != PrimitiveKind::Lines).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Mesh"),
                contents: bytemuck::cast_slice(&cube_mesh()),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        let object_stride = align_to(
            Self::object_size(),
            u64::from(device.limits().min_uniform_buffer_offset_alignment),
        );
        let object_buffer = Self::create_object_buffer(
            &device,
            primitive,
            INITIAL_OBJECT_CAPACITY * bytes_per_object(primitive, object_stride),
        );
        let object_bind_group = object_layout
            .as_ref()
            .map(|layout| Self::create_object_bind_group(&device, layout, &object_buffer));

        get_logger().info(
            LogComponent::Infrastructure("BenchRenderer"),
            &format!("✅ {} renderer for {} ready ({:?})", backend, primitive, config.format),
        );

        Ok(Self {
            canvas_id: canvas_id.to_string(),
            width,
            height,
            backend,
            primitive,
            surface,
            device,
            queue,
            config,
            pipeline,
            frame_buffer,
            frame_bind_group,
            mesh_buffer,
            object_layout,
            object_bind_group,
            object_buffer,
            object_stride,
            object_count: 0,
            started_at_ms: now_ms(),
        })
    }

    fn build_pipeline(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        primitive: PrimitiveKind,
        frame_layout: &wgpu::BindGroupLayout,
        object_layout: Option<&wgpu::BindGroupLayout>,
    ) -> wgpu::RenderPipeline {
        let (body, label) = match primitive {
            PrimitiveKind::Cubes => (CUBE_WGSL, "Cube Shader"),
            PrimitiveKind::InstancedCubes => (CUBE_INSTANCED_WGSL, "Instanced Cube Shader"),
            PrimitiveKind::Lines => (LINE_WGSL, "Line Shader"),
        };
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(format!("{}\n{}", COMMON_WGSL, body).into()),
        });

        let mut bind_group_layouts = vec![frame_layout];
        bind_group_layouts.extend(object_layout);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Bench Pipeline Layout"),
            bind_group_layouts: &bind_group_layouts,
            push_constant_ranges: &[],
        });

        let buffers = match primitive {
            PrimitiveKind::Cubes => vec![MeshVertex::desc()],
            PrimitiveKind::InstancedCubes => vec![MeshVertex::desc(), ObjectTransform::instance_desc()],
            PrimitiveKind::Lines => vec![LineVertex::desc()],
        };
        let (topology, cull_mode) = match primitive {
            PrimitiveKind::Lines => (wgpu::PrimitiveTopology::LineList, None),
            _ => (wgpu::PrimitiveTopology::TriangleList, Some(wgpu::Face::Back)),
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Bench Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
            multiview: None,
            cache: None,
        })
    }

    pub(super) fn create_object_buffer(
        device: &wgpu::Device,
        primitive: PrimitiveKind,
        size: u64,
    ) -> wgpu::Buffer {
        let usage = match primitive {
            PrimitiveKind::Cubes => wgpu::BufferUsages::UNIFORM,
            PrimitiveKind::InstancedCubes | PrimitiveKind::Lines => wgpu::BufferUsages::VERTEX,
        };
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Buffer"),
            size,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub(super) fn create_object_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bind_group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(Self::object_size()),
                }),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::{LogEntry, Logger, init_logger};
    use std::sync::Mutex;

    static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct RecordingLogger;

    impl Logger for RecordingLogger {
        fn log(&self, entry: LogEntry) {
            SEEN.lock().unwrap().push(entry.message);
        }
    }

    #[test]
    fn init_error_leaves_reporting_to_the_caller() {
        init_logger(Box::new(RecordingLogger));
        let err = init_error("adapter went away");
        assert_eq!(err, BenchmarkError::BackendInit("adapter went away".to_string()));
        assert!(!SEEN.lock().unwrap().iter().any(|m| m.contains("adapter went away")));
    }
}
