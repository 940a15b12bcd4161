//! Paddle Balls entry point
//!
//! Opens the window and runs the fixed-rate game loop.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use paddle_balls::Settings;
use paddle_balls::input::{Command, InputState};
use paddle_balls::pacing::FrameClock;
use paddle_balls::renderer::{RenderState, ShapeBatch};
use paddle_balls::sim::{GameState, draw, tick};

/// Seconds between fps log lines
const FPS_LOG_INTERVAL_SECS: u64 = 5;

/// Game instance holding all state
struct Game {
    settings: Settings,
    state: GameState,
    input: InputState,
    clock: FrameClock,
    batch: ShapeBatch,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Quit requested; the loop stops once the current frame is done
    quitting: bool,
    /// Failure while opening the window or GPU, reported after the loop exits
    startup_error: Option<anyhow::Error>,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Result<Self> {
        let state = settings.new_game(seed)?;
        let clock = FrameClock::new(state.fps, Instant::now());
        Ok(Self {
            settings,
            state,
            input: InputState::default(),
            clock,
            batch: ShapeBatch::new(),
            window: None,
            render_state: None,
            quitting: false,
            startup_error: None,
        })
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| anyhow!("failed to create window: {e}"))?,
        );

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), self.state.resolution))
                .context("failed to initialise renderer")?;

        log::info!(
            "Window open at {}x{} ({} fps target)",
            self.settings.width,
            self.settings.height,
            self.state.fps
        );
        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let pressed = event.state == ElementState::Pressed;
        match self.input.key_changed(&event.logical_key, pressed, event.repeat) {
            Some(Command::Quit) => self.quitting = true,
            Some(Command::Spawn) => {
                self.state.spawn_ball();
            }
            None => {}
        }
    }

    /// Simulate one frame if due, then draw and present
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.is_due(now) {
            tick(&mut self.state, &self.input.tick_input());
            self.clock.frame_done(now);

            if self.state.frame % (self.state.fps as u64 * FPS_LOG_INTERVAL_SECS) == 0 {
                log::debug!(
                    "frame {}: {:.1} fps, {} balls",
                    self.state.frame,
                    self.clock.fps(),
                    self.state.balls.len()
                );
            }
        }

        draw(&self.state, self.settings.background, &mut self.batch);

        if let Some(render_state) = &mut self.render_state {
            match render_state.render(&self.batch) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.open_window(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.quitting = true,
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.clear(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.quitting {
            event_loop.exit();
            return;
        }
        if self.clock.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame()));
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Paddle Balls starting (seed {seed})");
    log::info!("Controls: Left/Right move, R spawns a ball, Esc quits");

    let event_loop = EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;
    let mut game = Game::new(settings, seed)?;
    event_loop
        .run_app(&mut game)
        .map_err(|e| anyhow!("event loop failed: {e}"))?;

    if let Some(err) = game.startup_error.take() {
        log::error!("{err:#}");
        return Err(err);
    }

    log::info!(
        "Stopped after {} frames with {} balls",
        game.state.frame,
        game.state.balls.len()
    );
    Ok(())
}
