use crate::error::ViewerError;
use wgpu::util::DeviceExt;

/// Position-only vertex, tightly packed.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    /// Vertex layout descriptor: one vec3 attribute at shader location 0,
    /// stride 12, no padding.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The eight corners of a unit cube centered at the origin.
pub const CUBE_VERTICES: [Vertex; 8] = [
    Vertex { position: [-0.5, -0.5, -0.5] },
    Vertex { position: [ 0.5, -0.5, -0.5] },
    Vertex { position: [ 0.5,  0.5, -0.5] },
    Vertex { position: [-0.5,  0.5, -0.5] },
    Vertex { position: [-0.5, -0.5,  0.5] },
    Vertex { position: [ 0.5, -0.5,  0.5] },
    Vertex { position: [ 0.5,  0.5,  0.5] },
    Vertex { position: [-0.5,  0.5,  0.5] },
];

/// 12 triangles covering the 6 faces, wound counter-clockwise as seen from
/// outside the cube.
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 3, 2,  2, 1, 0, // -Z
    4, 5, 6,  6, 7, 4, // +Z
    0, 4, 7,  7, 3, 0, // -X
    1, 2, 6,  6, 5, 1, // +X
    0, 1, 5,  5, 4, 0, // -Y
    2, 3, 7,  7, 6, 2, // +Y
];

/// GPU-resident cube geometry.
pub struct CubeMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl CubeMesh {
    /// Upload the fixed cube geometry. No runtime parameters, deterministic
    /// output; allocation failure surfaces as `BufferAlloc`.
    pub fn upload(device: &wgpu::Device) -> Result<Self, ViewerError> {
        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(ViewerError::BufferAlloc(err.to_string()));
        }

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: CUBE_INDICES.len() as u32,
        })
    }
}
