//! Score readout and game-over overlay, drawn with egui on top of the scene

use wgpu::{
    CommandEncoder, Device, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, StoreOp, SurfaceConfiguration, TextureView,
};
use winit::event::WindowEvent;
use winit::window::Window;

use crate::renderer::FrameSnapshot;

pub struct Hud {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// One frame of prepared HUD geometry, consumed by `render`
pub struct HudFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    screen: egui_wgpu::ScreenDescriptor,
}

impl Hud {
    pub fn new(window: &Window, device: &Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            None,
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feed a window event to egui; returns true if egui consumed it
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the overlay UI and upload its geometry
    pub fn prepare(
        &mut self,
        window: &Window,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        surface_config: &SurfaceConfiguration,
        snapshot: &FrameSnapshot,
    ) -> HudFrame {
        let raw_input = self.state.take_egui_input(window);
        let output = self.ctx.run(raw_input, |ctx| {
            build_overlay(ctx, snapshot.score, snapshot.paused);
        });
        self.state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = window.scale_factor() as f32;
        let primitives = self.ctx.tessellate(output.shapes, pixels_per_point);
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [surface_config.width, surface_config.height],
            pixels_per_point,
        };

        for (id, image_delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &primitives, &screen);

        HudFrame {
            primitives,
            textures_delta: output.textures_delta,
            screen,
        }
    }

    /// Draw the prepared overlay on top of the scene
    pub fn render(&mut self, encoder: &mut CommandEncoder, view: &TextureView, frame: HudFrame) {
        {
            let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Hud Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Load,
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .render(&mut pass.forget_lifetime(), &frame.primitives, &frame.screen);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn build_overlay(ctx: &egui::Context, score: u32, paused: bool) {
    let text = |s: String| egui::RichText::new(s).size(16.0).color(egui::Color32::BLACK);

    egui::Area::new(egui::Id::new("score"))
        .fixed_pos(egui::pos2(5.0, 5.0))
        .show(ctx, |ui| {
            ui.label(text(format!("Score: {}", score)));
        });

    if paused {
        egui::Area::new(egui::Id::new("game_over"))
            .fixed_pos(egui::pos2(100.0, 200.0))
            .show(ctx, |ui| {
                ui.label(text(format!("Game Over, Score: {}", score)));
            });
        egui::Area::new(egui::Id::new("restart_prompt"))
            .fixed_pos(egui::pos2(60.0, 230.0))
            .show(ctx, |ui| {
                ui.label(text("Press SPACE or TAP to continue".to_string()));
            });
    }
}
