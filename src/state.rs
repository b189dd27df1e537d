use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Frame loop state machine.
///
/// Two states, one transition: `Running -> Terminated` on a close request.
/// Nothing transitions back. Kept separate from rendering so the transition
/// can be exercised without a window or graphics context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }

    /// Feed one window event through the state machine.
    ///
    /// A close request (window close button, or Escape) moves to
    /// `Terminated`; every other event leaves the state untouched.
    pub fn observe(&mut self, event: &WindowEvent) {
        if Self::is_close_request(event) {
            *self = LoopState::Terminated;
        }
    }

    fn is_close_request(event: &WindowEvent) -> bool {
        matches!(
            event,
            WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    event: KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                    ..
                }
        )
    }
}
