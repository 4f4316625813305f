use crate::catalog::Rgb;
use crate::constants::{MARKER_SEGMENTS, SHELL_SEGMENTS};
use crate::scene::Scene;
use crate::state::Camera;
use glam::Vec3;
use wgpu::util::DeviceExt;

mod helpers;
pub mod mesh;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    center: [f32; 3],
    radii: [f32; 3],
    color: [f32; 4],
}

impl InstanceData {
    fn new(center: Vec3, radii: Vec3, color: Rgb, opacity: f32) -> Self {
        let [r, g, b] = color.to_linear();
        Self {
            center: center.to_array(),
            radii: radii.to_array(),
            color: [r, g, b, opacity],
        }
    }
}

struct IndexedMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl IndexedMesh {
    fn upload(device: &wgpu::Device, label: &str, data: &mesh::MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}

/// WebGPU/native renderer for one [`Scene`]: the shell as a line-list
/// wireframe plus instanced, alpha-blended marker spheres.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    solid_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    sphere: IndexedMesh,
    wireframe: IndexedMesh,
    shell_instance_vb: wgpu::Buffer,
    marker_instance_vb: wgpu::Buffer,
    marker_count: u32,

    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let solid_pipeline = helpers::make_scene_pipeline(
            &device,
            "marker_pipeline",
            &pipeline_layout,
            &shader,
            format,
            wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            true,
        );
        // Shell lines never occlude the markers inside it
        let wire_pipeline = helpers::make_scene_pipeline(
            &device,
            "shell_pipeline",
            &pipeline_layout,
            &shader,
            format,
            wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            false,
        );

        let (mw, mh) = MARKER_SEGMENTS;
        let (sw, sh) = SHELL_SEGMENTS;
        let sphere = IndexedMesh::upload(&device, "marker_mesh", &mesh::uv_sphere(mw, mh));
        let wireframe =
            IndexedMesh::upload(&device, "shell_mesh", &mesh::uv_sphere_wireframe(sw, sh));

        let shell = scene.shell();
        let shell_instance = [InstanceData::new(
            shell.center,
            shell.radii,
            shell.color,
            shell.opacity,
        )];
        let shell_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shell_instance_vb"),
            contents: bytemuck::cast_slice(&shell_instance),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let marker_count = scene.markers().len() as u32;
        let marker_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker_instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * scene.markers().len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let [r, g, b] = scene.background.to_linear();
        log::info!(
            "[gpu] surface {}x{} format={:?} markers={}",
            width,
            height,
            format,
            marker_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            solid_pipeline,
            wire_pipeline,
            uniform_buffer,
            bind_group,
            sphere,
            wireframe,
            shell_instance_vb,
            marker_instance_vb,
            marker_count,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        let (_tex, view) =
            helpers::create_depth_texture(&self.device, self.config.width, self.config.height);
        self.depth_view = view;
    }

    fn write_uniforms(&self, camera: &Camera, scene: &Scene) {
        let light = &scene.lighting;
        let dir = light.directional_position.normalize_or_zero();
        let [lr, lg, lb] = light.directional.to_linear();
        let [ar, ag, ab] = light.ambient.to_linear();
        let li = light.directional_intensity;
        let ai = light.ambient_intensity;
        let uniforms = SceneUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            light_color: [lr * li, lg * li, lb * li, 1.0],
            ambient: [ar * ai, ag * ai, ab * ai, 1.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Marker instances ordered far to near for blending.
    fn write_marker_instances(&self, camera: &Camera, scene: &Scene) {
        let mut order: Vec<(f32, InstanceData)> = scene
            .markers()
            .iter()
            .map(|m| {
                (
                    m.center.distance_squared(camera.eye),
                    InstanceData::new(m.center, m.radii, m.color, m.opacity),
                )
            })
            .collect();
        order.sort_by(|a, b| b.0.total_cmp(&a.0));
        let instances: Vec<InstanceData> = order.into_iter().map(|(_, d)| d).collect();
        if !instances.is_empty() {
            self.queue.write_buffer(
                &self.marker_instance_vb,
                0,
                bytemuck::cast_slice(&instances),
            );
        }
    }

    pub fn render(&mut self, camera: &Camera, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(camera, scene);
        self.write_marker_instances(camera, scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_pipeline(&self.wire_pipeline);
            rpass.set_vertex_buffer(0, self.wireframe.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.shell_instance_vb.slice(..));
            rpass.set_index_buffer(
                self.wireframe.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.wireframe.index_count, 0, 0..1);

            if self.marker_count > 0 {
                rpass.set_pipeline(&self.solid_pipeline);
                rpass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.marker_instance_vb.slice(..));
                rpass.set_index_buffer(
                    self.sphere.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..self.sphere.index_count, 0, 0..self.marker_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
