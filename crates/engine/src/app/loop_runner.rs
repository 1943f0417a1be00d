use std::collections::VecDeque;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{ModifiersState, PhysicalKey};
use winit::window::WindowBuilder;

use super::metrics::MetricsAccumulator;
use super::{
    Background, BackgroundError, BackgroundSource, InputEvent, Key, Modifiers, PointerButton,
    Renderer, Scene, Vec2,
};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub metrics_log_interval: Duration,
    pub background: BackgroundSource,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Board".to_string(),
            window_width: 1280,
            window_height: 720,
            target_fps: 60,
            metrics_log_interval: Duration::from_secs(1),
            background: BackgroundSource::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load background: {0}")]
    Background(#[from] BackgroundError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub fn run_app(config: LoopConfig, mut scene: Box<dyn Scene>) -> Result<(), AppError> {
    let background = Background::load(&config.background)?;
    info!(
        background = ?config.background,
        window_width = config.window_width,
        window_height = config.window_height,
        "startup"
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let mut renderer =
        Renderer::new(Arc::clone(&window), background).map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let frame_target = target_frame_duration(config.target_fps);
    info!(
        target_fps = config.target_fps.max(1),
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        "loop_config"
    );

    let mut input_collector = InputCollector::default();
    let mut last_frame_instant = Instant::now();
    let mut last_present_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval, Instant::now());
    let mut last_applied_title: Option<String> = None;

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    input_collector.mark_quit_requested();
                    info!(reason = "window_close", "shutdown_requested");
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let size = window.inner_size();
                    if let Err(error) = renderer.resize(size.width, size.height) {
                        warn!(error = %error, "renderer_resize_failed");
                        window_target.exit();
                    }
                }
                WindowEvent::ModifiersChanged(modifiers) => {
                    input_collector.set_modifiers(modifiers.state());
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input_collector.set_cursor_position_px(position.x as f32, position.y as f32);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input_collector.handle_mouse_input(button, state);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input_collector.handle_physical_key(event.physical_key, event.state, event.repeat);
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                    last_frame_instant = now;

                    let events = input_collector.take_events();
                    metrics_accumulator.record_events(events.len());
                    for (event, received_at) in events {
                        if event == InputEvent::Quit {
                            window_target.exit();
                            return;
                        }
                        scene.handle_event(&event, received_at);
                    }

                    let elapsed_since_last_present =
                        Instant::now().saturating_duration_since(last_present_instant);
                    let cap_sleep = compute_cap_sleep(elapsed_since_last_present, frame_target);
                    if cap_sleep > Duration::ZERO {
                        thread::sleep(cap_sleep);
                    }

                    scene.render(&mut renderer);
                    if let Err(error) = renderer.present() {
                        warn!(error = %error, "renderer_draw_failed");
                        window_target.exit();
                    }
                    last_present_instant = Instant::now();

                    let next_title = scene.title();
                    if next_title != last_applied_title {
                        match &next_title {
                            Some(title) => window.set_title(title),
                            None => window.set_title(&config.window_title),
                        }
                        last_applied_title = next_title;
                    }

                    metrics_accumulator.record_frame(raw_frame_dt);
                    if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                        info!(
                            fps = snapshot.fps,
                            events_per_second = snapshot.events_per_second,
                            frame_time_ms = snapshot.frame_time_ms,
                            "loop_metrics"
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Turns backend window events into the normalized, time-stamped event queue.
#[derive(Debug, Default)]
struct InputCollector {
    queue: VecDeque<(InputEvent, Instant)>,
    modifiers: Modifiers,
    cursor_position_px: Vec2,
}

impl InputCollector {
    fn push(&mut self, event: InputEvent) {
        self.queue.push_back((event, Instant::now()));
    }

    fn take_events(&mut self) -> Vec<(InputEvent, Instant)> {
        self.queue.drain(..).collect()
    }

    fn mark_quit_requested(&mut self) {
        self.push(InputEvent::Quit);
    }

    fn set_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            ctrl: state.control_key(),
            shift: state.shift_key(),
            alt: state.alt_key(),
        };
    }

    fn set_cursor_position_px(&mut self, x: f32, y: f32) {
        self.cursor_position_px = Vec2 { x, y };
        self.push(InputEvent::PointerMove {
            position: self.cursor_position_px,
        });
    }

    fn handle_physical_key(&mut self, key: PhysicalKey, state: ElementState, repeat: bool) {
        // Held keys fire once; releases carry no meaning for the board.
        if state != ElementState::Pressed || repeat {
            return;
        }
        let key = match key {
            PhysicalKey::Code(code) => Key::from_key_code(code),
            PhysicalKey::Unidentified(_) => Key::Other,
        };
        self.push(InputEvent::KeyDown {
            key,
            modifiers: self.modifiers,
        });
    }

    fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            _ => return,
        };
        let position = self.cursor_position_px;
        self.push(match state {
            ElementState::Pressed => InputEvent::PointerDown { button, position },
            ElementState::Released => InputEvent::PointerUp { button, position },
        });
    }
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

fn target_frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

fn compute_cap_sleep(elapsed: Duration, frame_target: Duration) -> Duration {
    frame_target.saturating_sub(elapsed)
}
