use std::thread;
use std::time::{Duration, Instant};

/// Frame rate cap via end-of-frame blocking.
///
/// After each frame the caller invokes [`FramePacer::wait`], which sleeps for
/// whatever remains of the frame interval. Frames that already took longer
/// than the interval pass through without sleeping.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// Pacer targeting the given frequency.
    pub fn new(hz: f32) -> Self {
        Self {
            interval: Duration::from_secs_f32(1.0 / hz),
            frame_start: Instant::now(),
        }
    }

    /// Block until the current frame has consumed its full interval, then
    /// start timing the next frame.
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.interval {
            thread::sleep(self.interval - elapsed);
        }
        self.frame_start = Instant::now();
    }
}
