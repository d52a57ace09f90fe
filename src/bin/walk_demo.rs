//! Walkabout demo
//!
//! Opens a window over the box-field scene and drives the player controller
//! from real input. Nothing is drawn; the window title shows the player's
//! position and what is hovered or carried, and pose changes are logged.
//!
//! Controls: click to capture the pointer, WASD/arrows to walk, Space to jump
//! (gravity mode), left click to pick up or drop the hovered box, ESC to
//! release the pointer.
//!
//! Native: `cargo run --bin walk_demo [player.json]`
//! Browser (wasm): build with `cargo build --bin walk_demo --target wasm32-unknown-unknown`,
//! then run `wasm-bindgen` and serve.

use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use walkabout_engine::camera::{CameraControl, LockAction};
use walkabout_engine::game::AppContext;
use walkabout_engine::input::{InputEvent, KeyCode};
use web_time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

const WINDOW_TITLE: &str = "walkabout";

/// How often the pose is written to the log (seconds).
const POSE_LOG_INTERVAL: f32 = 1.0;

struct WalkDemoApp {
    window: Option<Arc<Window>>,
    app: AppContext,
    last_frame: Instant,
    since_pose_log: f32,
    last_title: String,
}

impl WalkDemoApp {
    fn new(app: AppContext) -> Self {
        Self {
            window: None,
            app,
            last_frame: Instant::now(),
            since_pose_log: 0.0,
            last_title: String::new(),
        }
    }

    fn window_attributes() -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(1280, 720));
        #[cfg(target_arch = "wasm32")]
        let attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;
            attrs.with_append(true)
        };
        attrs
    }

    /// Mirror the pointer lock state onto the OS cursor.
    fn apply_pointer_state(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let pointer = self.app.player.camera_mut().pointer_mut();
        if !pointer.is_dirty() {
            return;
        }
        if pointer.should_grab_cursor() {
            if window.set_cursor_grab(CursorGrabMode::Locked).is_err()
                && let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined)
            {
                log::warn!("cursor grab unavailable: {e}");
            }
            window.set_cursor_visible(false);
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        pointer.clear_dirty();
    }

    fn handle_click(&mut self) {
        let action = self.app.player.camera_mut().pointer_mut().handle_click();
        match action {
            // First click only captures the pointer
            LockAction::Apply => self.apply_pointer_state(),
            LockAction::None => self.app.handle_input(InputEvent::Trigger),
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.app.update(dt);

        self.since_pose_log += dt;
        if self.since_pose_log >= POSE_LOG_INTERVAL && self.app.is_locked() {
            self.since_pose_log = 0.0;
            let pose = self.app.pose();
            log::debug!(
                "pose {} yaw {:.2} pitch {:.2}",
                pose.position,
                pose.yaw,
                pose.pitch
            );
        }

        let title = self.app.status_line();
        if title != self.last_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.last_title = title;
        }
    }
}

impl ApplicationHandler for WalkDemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(Self::window_attributes()) {
            Ok(window) => {
                self.window = Some(Arc::new(window));
                self.last_frame = Instant::now();
                log::info!("window ready, click to play");
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = KeyCode::from(code);
                    let pressed = event.state == ElementState::Pressed;
                    self.app.handle_key(key, pressed);
                    if key == KeyCode::Escape && pressed {
                        self.apply_pointer_state();
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_click(),
            WindowEvent::Focused(focused) => {
                if self.app.handle_focus(focused) {
                    self.apply_pointer_state();
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if !self.app.player.camera().is_locked() {
            return;
        }
        if let DeviceEvent::MouseMotion { delta } = event {
            self.app.handle_input(InputEvent::Look {
                dx: delta.0 as f32,
                dy: delta.1 as f32,
            });
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let app = AppContext::from_config_path(config_path.as_deref())?;

    println!("Click to play. WASD/arrows walk, click picks up or drops a box, ESC releases.");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut demo = WalkDemoApp::new(app);
    event_loop.run_app(&mut demo)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Browser entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    use winit::platform::web::EventLoopExtWebSys;

    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let app = AppContext::new(Default::default());
    event_loop.spawn_app(WalkDemoApp::new(app));
}
