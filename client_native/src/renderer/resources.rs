use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};
use game_core::Config;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

/// Number of solid pipe rectangles (two spans per ring slot)
pub const PIPE_RECTS: usize = 6;

pub struct GameBuffers {
    pub camera: Buffer,
    pub pipes: Buffer,      // PIPE_RECTS instances, rewritten per frame
    pub bird: Buffer,       // one instance, rewritten per frame
    pub background: Buffer, // one full-screen instance, written once
}

pub fn create_buffers(device: &Device, camera: &Camera, config: &Config) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let pipes = device.create_buffer(&BufferDescriptor {
        label: Some("Pipe Instance Buffer"),
        size: instance_size * PIPE_RECTS as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bird = device.create_buffer(&BufferDescriptor {
        label: Some("Bird Instance Buffer"),
        size: instance_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    // The background never moves: one static full-screen quad
    let background_instance = InstanceData {
        transform: [0.0, 0.0, config.screen_width, config.screen_height],
        tint: [1.0, 1.0, 1.0, 1.0],
    };
    let background = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Background Instance Buffer"),
        contents: bytemuck::cast_slice(&[background_instance]),
        usage: BufferUsages::VERTEX,
    });

    GameBuffers {
        camera: camera_buffer,
        pipes,
        bird,
        background,
    }
}
