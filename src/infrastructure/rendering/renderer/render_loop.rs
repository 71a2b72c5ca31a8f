use super::*;
use crate::log_trace;

/// Background behind the population
const CLEAR_COLOR: wgpu::Color = wgpu::Color { r: 0.08, g: 0.09, b: 0.12, a: 1.0 };

impl BenchRenderer {
    /// Replace the GPU copy of the population.
    pub fn upload_population(&mut self, objects: &[ObjectTransform]) {
        self.object_count = objects.len() as u32;
        if objects.is_empty() {
            return;
        }

        match self.primitive {
            PrimitiveKind::Cubes => {
                let bytes = pack_uniform_objects(objects, self.object_stride);
                self.ensure_object_capacity(bytes.len() as u64);
                self.queue.write_buffer(&self.object_buffer, 0, &bytes);
            }
            PrimitiveKind::InstancedCubes => {
                let bytes: &[u8] = bytemuck::cast_slice(objects);
                self.ensure_object_capacity(bytes.len() as u64);
                self.queue.write_buffer(&self.object_buffer, 0, bytes);
            }
            PrimitiveKind::Lines => {
                let vertices = line_vertices(objects);
                let bytes: &[u8] = bytemuck::cast_slice(&vertices);
                self.ensure_object_capacity(bytes.len() as u64);
                self.queue.write_buffer(&self.object_buffer, 0, bytes);
            }
        }

        log_trace!(
            LogComponent::Infrastructure("BenchRenderer"),
            "📊 Uploaded {} {}",
            self.object_count,
            self.primitive
        );
    }

    /// Grow the object buffer (and its bind group) to hold `required` bytes.
    fn ensure_object_capacity(&mut self, required: u64) {
        let current = self.object_buffer.size();
        if required <= current {
            return;
        }

        let size = grow_capacity(current, required);
        get_logger().debug(
            LogComponent::Infrastructure("BenchRenderer"),
            &format!("📦 Growing object buffer {} -> {} bytes", current, size),
        );

        self.object_buffer.destroy();
        self.object_buffer = Self::create_object_buffer(&self.device, self.primitive, size);
        if let Some(layout) = &self.object_layout {
            self.object_bind_group =
                Some(Self::create_object_bind_group(&self.device, layout, &self.object_buffer));
        }
    }

    /// Draw one frame of the current population. `now_ms` drives the spin.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped.
    pub fn render_frame(&mut self, now_ms: f64) -> Result<(), wgpu::SurfaceError> {
        let uniforms = self.frame_uniforms(now_ms);
        self.queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&uniforms));

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Bench Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Bench Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if self.object_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
                self.encode_draws(&mut render_pass);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn encode_draws(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        match self.primitive {
            PrimitiveKind::Cubes => {
                let (Some(mesh), Some(objects)) = (&self.mesh_buffer, &self.object_bind_group) else {
                    return;
                };
                render_pass.set_vertex_buffer(0, mesh.slice(..));
                for i in 0..self.object_count {
                    let offset = (u64::from(i) * self.object_stride) as wgpu::DynamicOffset;
                    render_pass.set_bind_group(1, objects, &[offset]);
                    render_pass.draw(0..CUBE_VERTEX_COUNT, 0..1);
                }
            }
            PrimitiveKind::InstancedCubes => {
                let Some(mesh) = &self.mesh_buffer else {
                    return;
                };
                render_pass.set_vertex_buffer(0, mesh.slice(..));
                render_pass.set_vertex_buffer(1, self.object_buffer.slice(..));
                render_pass.draw(0..CUBE_VERTEX_COUNT, 0..self.object_count);
            }
            PrimitiveKind::Lines => {
                render_pass.set_vertex_buffer(0, self.object_buffer.slice(..));
                render_pass.draw(0..self.object_count * 2, 0..1);
            }
        }
    }
}
