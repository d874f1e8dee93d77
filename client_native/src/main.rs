mod assets;
mod camera;
mod hud;
mod input;
mod logging;
mod mesh;
mod pacer;
mod renderer;

use std::sync::Arc;

use anyhow::Context as _;
use hecs::World;
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::Window,
};

use game_core::{
    create_bird, create_pipes, step, Bird, Config, Events, GameFsm, GameRng, InputQueue, Params,
    Pipe, Score, Scroll,
};

use hud::Hud;
use input::Intent;
use pacer::FramePacer;
use renderer::{FrameSnapshot, PipeSnapshot, Renderer};

struct App {
    window: Arc<Window>,
    renderer: Renderer,
    hud: Hud,
    pacer: FramePacer,

    // Simulation state, all owned by the loop
    world: World,
    fsm: GameFsm,
    config: Config,
    score: Score,
    scroll: Scroll,
    events: Events,
    input_queue: InputQueue,
    rng: GameRng,
}

impl App {
    fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let config = Config::new();
        let mut rng = GameRng::from_entropy();

        let mut world = World::new();
        create_bird(&mut world, &config);
        create_pipes(&mut world, &mut rng, &config);

        let renderer = pollster::block_on(Renderer::new(window.clone(), &config))?;
        let hud = Hud::new(&window, &renderer.device, renderer.surface_config.format);

        Ok(Self {
            window,
            renderer,
            hud,
            pacer: FramePacer::new(Params::TICKS_PER_SECOND),
            world,
            fsm: GameFsm::new(),
            scroll: Scroll::new(config.scroll_speed),
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng,
        })
    }

    fn apply_intent(&mut self, intent: Intent, elwt: &ActiveEventLoop) {
        match intent {
            Intent::Activate => self.input_queue.push_activate(),
            Intent::Quit => {
                tracing::info!("quit requested");
                elwt.exit();
            }
        }
    }

    /// Advance the simulation one tick and report what happened
    fn tick(&mut self) {
        step(
            &mut self.world,
            &mut self.fsm,
            &self.config,
            &mut self.score,
            &mut self.scroll,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );

        if self.events.passed_pipe {
            tracing::debug!(score = self.score.points, "pipe passed");
        }
        if self.events.collided {
            tracing::info!(score = self.score.points, "bird crashed, round frozen");
        }
        if self.events.restarted {
            tracing::info!("round restarted");
        }
    }

    fn snapshot(&self) -> FrameSnapshot {
        let mut bird_y = self.config.bird_start_y;
        for (_e, bird) in self.world.query::<&Bird>().iter() {
            bird_y = bird.y;
        }

        let mut pipes = [PipeSnapshot::default(); 3];
        for (_e, pipe) in self.world.query::<&Pipe>().iter() {
            pipes[pipe.slot as usize] = PipeSnapshot {
                x: pipe.x,
                gap_top: pipe.gap_top,
            };
        }

        FrameSnapshot {
            bird_y,
            pipes,
            score: self.score.points,
            paused: self.fsm.is_paused(),
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let snapshot = self.snapshot();
        renderer::draw::draw_frame(
            &self.renderer,
            &mut self.hud,
            &self.window,
            &snapshot,
            &self.config,
        )
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let event_loop = EventLoop::new().context("create event loop")?;
    let window_attributes = Window::default_attributes()
        .with_title("Pixel Bird")
        .with_inner_size(LogicalSize::new(
            Params::SCREEN_WIDTH as f64,
            Params::SCREEN_HEIGHT as f64,
        ))
        .with_resizable(false);
    let window = Arc::new(
        event_loop
            .create_window(window_attributes)
            .context("create window")?,
    );

    let mut app = App::new(window)?;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if app.hud.on_window_event(&app.window, event) {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => {
                        tracing::info!("quit requested");
                        elwt.exit();
                    }
                    WindowEvent::Resized(physical_size) => {
                        app.renderer.resize(physical_size.width, physical_size.height);
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(code),
                                state,
                                repeat,
                                ..
                            },
                        ..
                    } => {
                        if let Some(intent) = input::handle_key(*code, *state, *repeat) {
                            app.apply_intent(intent, elwt);
                        }
                    }
                    WindowEvent::MouseInput { state, .. } => {
                        if let Some(intent) = input::handle_mouse(*state) {
                            app.apply_intent(intent, elwt);
                        }
                    }
                    WindowEvent::Touch(touch) => {
                        if let Some(intent) = input::handle_touch(touch.phase) {
                            app.apply_intent(intent, elwt);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        app.tick();

                        match app.render() {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) => app.renderer.reconfigure(),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                tracing::error!("surface out of memory");
                                elwt.exit();
                            }
                            Err(err) => tracing::warn!(?err, "dropped frame"),
                        }

                        // Pace to the tick rate and yield before the next iteration
                        app.pacer.pace();
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
