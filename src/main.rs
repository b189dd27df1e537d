use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use cube_viewer::camera::CursorCamera;
use cube_viewer::error::ViewerError;
use cube_viewer::pacing::FramePacer;
use cube_viewer::renderer::RendererState;
use cube_viewer::state::LoopState;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const TARGET_HZ: f32 = 30.0;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<RendererState>,
    camera: CursorCamera,
    state: LoopState,
    pacer: FramePacer,
    fatal: Option<ViewerError>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            camera: CursorCamera::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            state: LoopState::default(),
            pacer: FramePacer::new(TARGET_HZ),
            fatal: None,
        }
    }

    fn draw_frame(&mut self) -> Result<(), ViewerError> {
        let Some(renderer) = &mut self.renderer else {
            return Ok(());
        };

        let view = self.camera.view_matrix()?;
        renderer.render(view)?;

        // Block out the rest of the frame interval to hold ~30 Hz.
        self.pacer.wait();
        Ok(())
    }

    /// Record a fatal error and stop the loop. Nothing is retried.
    fn abort(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        log::error!("fatal: {error}");
        self.fatal = Some(error);
        self.state = LoopState::Terminated;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Cube Viewer")
                .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.abort(
                    event_loop,
                    ViewerError::ContextInit(format!("window creation failed: {e}")),
                );
                return;
            }
        };

        let renderer = match pollster::block_on(RendererState::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                self.abort(event_loop, e);
                return;
            }
        };

        let size = renderer.size();
        self.camera.set_window_size(size.width, size.height);
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Once terminated, no event may trigger another draw.
        if !self.state.is_running() {
            return;
        }

        self.state.observe(&event);
        if !self.state.is_running() {
            log::info!("close requested, shutting down");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.set_cursor(position.x, position.y);
            }
            WindowEvent::Resized(new_size) => {
                self.camera.set_window_size(new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(new_size) {
                        self.abort(event_loop, e);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.draw_frame() {
                    self.abort(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let (Some(window), true) = (&self.window, self.state.is_running()) {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    log::info!("cube viewer starting: move the mouse to steer, Escape to quit");
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.fatal {
        return Err(error.into());
    }
    Ok(())
}
