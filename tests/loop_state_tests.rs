use cube_viewer::state::LoopState;
use winit::event::WindowEvent;

/// Minimal stand-in for the draw side of the loop, counting draws so the
/// close transition can be checked without a graphics context.
struct DrawCounter {
    draws: usize,
}

impl DrawCounter {
    fn new() -> Self {
        Self { draws: 0 }
    }

    fn frame(&mut self, state: &LoopState) {
        if state.is_running() {
            self.draws += 1;
        }
    }
}

#[cfg(test)]
mod transition_tests {
    use super::*;

    #[test]
    fn test_initial_state_is_running() {
        assert!(LoopState::default().is_running());
        assert_eq!(LoopState::default(), LoopState::Running);
    }

    #[test]
    fn test_close_transitions_within_one_iteration() {
        let mut state = LoopState::default();

        // Drain a batch of pending events containing a close request.
        let events = [
            WindowEvent::Focused(true),
            WindowEvent::CloseRequested,
            WindowEvent::RedrawRequested,
        ];
        for event in &events {
            state.observe(event);
        }

        assert_eq!(state, LoopState::Terminated);
    }

    #[test]
    fn test_no_other_transition_exists() {
        let mut state = LoopState::default();
        for event in [
            WindowEvent::Focused(false),
            WindowEvent::RedrawRequested,
            WindowEvent::Destroyed,
        ] {
            state.observe(&event);
            assert!(state.is_running(), "{:?} must not terminate the loop", event);
        }
    }

    #[test]
    fn test_terminated_never_returns_to_running() {
        let mut state = LoopState::Terminated;
        state.observe(&WindowEvent::Focused(true));
        state.observe(&WindowEvent::RedrawRequested);
        assert_eq!(state, LoopState::Terminated);
    }
}

#[cfg(test)]
mod draw_gating_tests {
    use super::*;

    #[test]
    fn test_no_draws_after_close() {
        let mut state = LoopState::default();
        let mut counter = DrawCounter::new();

        counter.frame(&state);
        counter.frame(&state);
        assert_eq!(counter.draws, 2);

        state.observe(&WindowEvent::CloseRequested);

        // However many more iterations happen, nothing draws.
        counter.frame(&state);
        counter.frame(&state);
        counter.frame(&state);
        assert_eq!(counter.draws, 2);
    }

    #[test]
    fn test_close_mid_batch_stops_subsequent_frames() {
        let mut state = LoopState::default();
        let mut counter = DrawCounter::new();

        counter.frame(&state);
        state.observe(&WindowEvent::CloseRequested);
        counter.frame(&state);

        assert_eq!(counter.draws, 1);
    }
}
