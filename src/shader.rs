use crate::error::ViewerError;
use crate::mesh::Vertex;
use glam::Mat4;
use wgpu::util::DeviceExt;

/// Fixed vertex stage source, embedded at build time.
pub const CUBE_VERTEX_SHADER: &str = include_str!("shaders/cube.vert.wgsl");

/// Fixed fragment stage source, embedded at build time.
pub const CUBE_FRAGMENT_SHADER: &str = include_str!("shaders/cube.frag.wgsl");

const MAT4_SIZE: u64 = std::mem::size_of::<[[f32; 4]; 4]>() as u64;

/// Uniform block layout shared with the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatrixUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl MatrixUniforms {
    pub fn identity() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

/// Byte offset of a named uniform within the uniform block.
///
/// An unknown name is a caller bug; the shader declares exactly these three.
pub fn uniform_offset(name: &str) -> Result<u64, ViewerError> {
    match name {
        "model" => Ok(0),
        "view" => Ok(MAT4_SIZE),
        "projection" => Ok(2 * MAT4_SIZE),
        other => Err(ViewerError::UniformNotFound(other.to_string())),
    }
}

/// Uniform offsets resolved once at startup and reused every frame.
#[derive(Debug, Clone, Copy)]
struct UniformLocations {
    model: u64,
    view: u64,
    projection: u64,
}

impl UniformLocations {
    fn resolve() -> Result<Self, ViewerError> {
        Ok(Self {
            model: uniform_offset("model")?,
            view: uniform_offset("view")?,
            projection: uniform_offset("projection")?,
        })
    }
}

/// Linked cube shader program: compiled stages, pipeline, uniform buffer,
/// and the resolved uniform locations.
pub struct CubeProgram {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    locations: UniformLocations,
}

impl CubeProgram {
    /// Compile both stages and link them into a render pipeline.
    ///
    /// Compile failures carry the compiler log per stage; a pipeline that
    /// fails validation against the compiled stages reports as a link error.
    pub fn build(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Result<Self, ViewerError> {
        let vertex_module = Self::compile_stage(device, "vertex", CUBE_VERTEX_SHADER)?;
        let fragment_module = Self::compile_stage(device, "fragment", CUBE_FRAGMENT_SHADER)?;

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Matrix Uniform Buffer"),
            contents: bytemuck::cast_slice(&[MatrixUniforms::identity()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            label: Some("cube_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("cube_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Cube Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(ViewerError::ShaderLink {
                log: err.to_string(),
            });
        }

        let locations = UniformLocations::resolve()?;

        Ok(Self {
            pipeline,
            bind_group,
            uniform_buffer,
            locations,
        })
    }

    fn compile_stage(
        device: &wgpu::Device,
        stage: &'static str,
        source: &str,
    ) -> Result<wgpu::ShaderModule, ViewerError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(stage),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        match pollster::block_on(device.pop_error_scope()) {
            Some(err) => Err(ViewerError::ShaderCompile {
                stage,
                log: err.to_string(),
            }),
            None => Ok(module),
        }
    }

    /// Write the three matrices at their cached uniform offsets.
    pub fn set_matrices(&self, queue: &wgpu::Queue, model: Mat4, view: Mat4, projection: Mat4) {
        queue.write_buffer(
            &self.uniform_buffer,
            self.locations.model,
            bytemuck::cast_slice(&model.to_cols_array()),
        );
        queue.write_buffer(
            &self.uniform_buffer,
            self.locations.view,
            bytemuck::cast_slice(&view.to_cols_array()),
        );
        queue.write_buffer(
            &self.uniform_buffer,
            self.locations.projection,
            bytemuck::cast_slice(&projection.to_cols_array()),
        );
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
