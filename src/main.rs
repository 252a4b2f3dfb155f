//! Particle Field
//!
//! A field of drifting particles that link to close neighbours and scatter
//! away from the pointer.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use pfield::config::AppConfig;
use pfield::headless;
use pfield::input::{InputAction, InputMapper};
use pfield::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use pfield_input::PointerTracker;
use pfield_sim::Bounds2;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: Option<SimulationSystem>,
    pointer: PointerTracker,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            render: None,
            simulation: None,
            pointer: PointerTracker::new(),
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::TogglePause => {
                if let Some(sim) = &mut self.simulation {
                    sim.toggle_pause();
                }
            }
            InputAction::Reseed => {
                if let Some(sim) = &mut self.simulation {
                    sim.reseed(None);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(render), Some(sim)) =
            (&self.window, &mut self.render, &mut self.simulation)
        else {
            return;
        };

        let stats = sim.update(render.batch_mut());

        if self.config.debug.show_stats {
            window.update_title(sim.field().particle_count(), stats, sim.is_paused());
        }

        match render.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.recover_surface(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        // Re-arm for the next display frame
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialise rendering: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render.size();
        self.pointer.resized(window.size());
        let field_config = self
            .config
            .field
            .to_field_config(self.config.rendering.particle_rgba());
        let simulation = SimulationSystem::new(
            field_config,
            Bounds2::new(width as f32, height as f32),
            self.config.field.seed,
        )
        .with_stats_interval(self.config.debug.stats_interval);

        log::info!(
            "Started field: {} particles on {}x{} (seed {})",
            simulation.field().particle_count(),
            width,
            height,
            simulation.seed()
        );

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.simulation = Some(simulation);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(field_event) = self.pointer.process_window_event(&event) {
            if let Some(sim) = &mut self.simulation {
                sim.apply(field_event);
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Particle Field");
    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    if config.debug.headless_frames > 0 {
        headless::run(&config, config.debug.headless_frames);
        return;
    }

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
