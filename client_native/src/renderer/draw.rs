use wgpu::*;
use winit::window::Window;

use super::resources::{InstanceData, PIPE_RECTS};
use super::{FrameSnapshot, Renderer};
use crate::hud::Hud;
use game_core::Config;

// Flat green fallback background, (0, 200, 0) srgb in linear terms
const CLEAR_COLOR: Color = Color {
    r: 0.0,
    g: 0.578,
    b: 0.0,
    a: 1.0,
};
const PIPE_TINT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const BIRD_FALLBACK_TINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const SPRITE_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub fn draw_frame(
    renderer: &Renderer,
    hud: &mut Hud,
    window: &Window,
    snapshot: &FrameSnapshot,
    config: &Config,
) -> Result<(), SurfaceError> {
    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, snapshot, config);
    let hud_frame = hud.prepare(
        window,
        &renderer.device,
        &renderer.queue,
        &mut encoder,
        &renderer.surface_config,
        snapshot,
    );

    render_scene(renderer, &mut encoder, &view);
    hud.render(&mut encoder, &view, hud_frame);

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &Renderer, snapshot: &FrameSnapshot, config: &Config) {
    let mut rects = [InstanceData {
        transform: [0.0; 4],
        tint: PIPE_TINT,
    }; PIPE_RECTS];

    for (i, pipe) in snapshot.pipes.iter().enumerate() {
        let bottom_y = (pipe.gap_top + config.pipe_gap) as f32;
        rects[2 * i] = InstanceData {
            transform: [pipe.x, 0.0, config.pipe_width, pipe.gap_top as f32],
            tint: PIPE_TINT,
        };
        rects[2 * i + 1] = InstanceData {
            transform: [
                pipe.x,
                bottom_y,
                config.pipe_width,
                config.screen_height - bottom_y,
            ],
            tint: PIPE_TINT,
        };
    }
    renderer
        .queue
        .write_buffer(&renderer.buffers.pipes, 0, bytemuck::cast_slice(&rects));

    let bird_tint = if renderer.bird_sprite.is_some() {
        SPRITE_TINT
    } else {
        BIRD_FALLBACK_TINT
    };
    let bird = InstanceData {
        transform: [
            config.bird_x,
            snapshot.bird_y,
            config.bird_width,
            config.bird_height,
        ],
        tint: bird_tint,
    };
    renderer
        .queue
        .write_buffer(&renderer.buffers.bird, 0, bytemuck::cast_slice(&[bird]));
}

fn render_scene(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Scene Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(CLEAR_COLOR),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    pass.set_vertex_buffer(0, renderer.quad_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.quad_mesh.index_buffer.slice(..), IndexFormat::Uint16);

    // Background image under everything, if it loaded
    if let Some(background) = &renderer.background_sprite {
        pass.set_pipeline(&renderer.sprite_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        pass.set_bind_group(1, &background.bind_group, &[]);
        pass.set_vertex_buffer(1, renderer.buffers.background.slice(..));
        pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..1);
    }

    // Pipe spans
    pass.set_pipeline(&renderer.quad_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.pipes.slice(..));
    pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..PIPE_RECTS as u32);

    // Bird: sprite if loaded, red quad otherwise
    match &renderer.bird_sprite {
        Some(sprite) => {
            pass.set_pipeline(&renderer.sprite_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_bind_group(1, &sprite.bind_group, &[]);
            pass.set_vertex_buffer(1, renderer.buffers.bird.slice(..));
            pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..1);
        }
        None => {
            pass.set_vertex_buffer(1, renderer.buffers.bird.slice(..));
            pass.draw_indexed(0..renderer.quad_mesh.index_count, 0, 0..1);
        }
    }
}
