//! Timing and stepping.

use std::cmp;
use std::thread;
use std::time::{Duration, Instant};

use super::settings::EngineParams;

/// Measures the duration of frames, optionally capping and clamping the
/// frame rate.
pub struct FrameTimer {
    min_fps: u32,
    max_fps: u32,
    timestep: Duration,
    last_frame_timepoint: Instant,
    frames: u64,
}

impl FrameTimer {
    pub fn new(params: &EngineParams) -> Self {
        FrameTimer {
            min_fps: params.min_fps,
            max_fps: params.max_fps,
            timestep: Duration::from_secs(0),
            last_frame_timepoint: Instant::now(),
            frames: 0,
        }
    }

    /// Starts a new frame. If a maximum fps is set, this waits until the
    /// frame budget of the last frame is used up, cooperatively giving up
    /// timeslices to the OS scheduler.
    pub fn advance(&mut self) -> Duration {
        if self.max_fps > 0 {
            let td = Duration::from_micros(1_000_000 / u64::from(self.max_fps));
            while self.last_frame_timepoint.elapsed() <= td {
                if (self.last_frame_timepoint.elapsed() + Duration::from_millis(2)) < td {
                    thread::sleep(Duration::from_millis(1));
                } else {
                    thread::yield_now();
                }
            }
        }

        self.advance_to(Instant::now())
    }

    /// Starts a new frame at `now`, without waiting.
    pub fn advance_to(&mut self, now: Instant) -> Duration {
        let mut elapsed = now.saturating_duration_since(self.last_frame_timepoint);
        self.last_frame_timepoint = now;

        // If fps lower than minimum, simply clamp it.
        if self.min_fps > 0 {
            elapsed = cmp::min(
                elapsed,
                Duration::from_micros(1_000_000 / u64::from(self.min_fps)),
            );
        }

        self.timestep = elapsed;
        self.frames += 1;
        elapsed
    }

    /// Gets the duration of the last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }

    /// Gets current fps.
    #[inline]
    pub fn fps(&self) -> u32 {
        let secs = self.timestep.as_secs_f64();
        if secs <= 0.0 {
            0
        } else {
            (1.0 / secs) as u32
        }
    }

    /// Number of frames started so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_long_frames() {
        let params = EngineParams {
            min_fps: 10,
            max_fps: 0,
            ..Default::default()
        };

        let mut timer = FrameTimer::new(&params);
        let start = Instant::now();
        timer.advance_to(start);

        let dt = timer.advance_to(start + Duration::from_secs(2));
        assert_eq!(dt, Duration::from_millis(100));
        assert_eq!(timer.fps(), 10);
        assert_eq!(timer.frames(), 2);

        let dt = timer.advance_to(start + Duration::from_millis(2050));
        assert_eq!(dt, Duration::from_millis(50));
    }

    #[test]
    fn cap_fast_frames() {
        let params = EngineParams {
            min_fps: 0,
            max_fps: 100,
            ..Default::default()
        };

        let mut timer = FrameTimer::new(&params);
        timer.advance();
        assert!(timer.advance() >= Duration::from_millis(10));
    }
}
