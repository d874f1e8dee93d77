pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::path::Path;
use std::sync::Arc;

use wgpu::*;
use winit::window::Window;

use crate::assets::{self, SpriteTexture};
use crate::camera::Camera;
use crate::mesh::{create_quad, Mesh};
use game_core::Config;
use resources::GameBuffers;

/// What the renderer needs from one simulation tick
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub bird_y: f32,
    pub pipes: [PipeSnapshot; 3],
    pub score: u32,
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipeSnapshot {
    pub x: f32,
    pub gap_top: i32,
}

#[allow(dead_code)]
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    // Pipelines
    pub quad_pipeline: RenderPipeline,
    pub sprite_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub quad_mesh: Mesh,
    pub background_sprite: Option<SpriteTexture>,
    pub bird_sprite: Option<SpriteTexture>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &Config) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await.map_err(anyhow::Error::msg)?;
        let camera = Camera::orthographic(config.screen_width, config.screen_height);

        let buffers = resources::create_buffers(&ctx.device, &camera, config);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let quad_mesh = create_quad(&ctx.device, &ctx.queue);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        // Optional images; either may be absent
        let background_sprite = assets::load_sprite(
            &ctx.device,
            &ctx.queue,
            &pipes.sprite_layout,
            Path::new(assets::BACKGROUND_PATH),
        );
        let bird_sprite = assets::load_sprite(
            &ctx.device,
            &ctx.queue,
            &pipes.sprite_layout,
            Path::new(assets::BIRD_PATH),
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            quad_pipeline: pipes.quad_pipeline,
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            buffers,
            quad_mesh,
            background_sprite,
            bird_sprite,
        })
    }

    /// Reconfigure the surface for a new physical size
    ///
    /// The window is not resizable, but compositors may still deliver a
    /// resize (scale changes, fullscreen shortcuts), and a lost surface
    /// recovers through the same path.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}
