//! Frame timing for the presentation loop.
//!
//! One [`Time`] value is owned by the running app and updated once per
//! redraw. Animations (hearts, bursts, the card reveal delay) read elapsed
//! time from here rather than calling `Instant::now()` themselves, so tests
//! can drive everything with a fixed delta.

use std::time::Instant;

/// Elapsed/delta time tracker.
///
/// With a fixed delta set, `update()` ignores the wall clock and advances
/// elapsed time by exactly that amount each call — the presentation becomes
/// a pure function of the tick count.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fixed_delta: Option<f32>,
}

impl Time {
    /// Start tracking from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
        }
    }

    /// Advance by one frame. Returns `(elapsed, delta)` in seconds.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();
        match self.fixed_delta {
            Some(dt) => {
                self.delta_secs = dt;
                self.elapsed_secs += dt;
            }
            None => {
                self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
                self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
            }
        }
        self.last_frame = now;
        self.frame_count += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since start (as of the last `update()`).
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds between the last two frames.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Use a fixed timestep instead of the wall clock.
    ///
    /// Pass `None` to return to real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_starts_at_zero() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.elapsed(), 0.0);
    }

    #[test]
    fn test_update_advances() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(5));
        let (elapsed, delta) = time.update();
        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_fixed_delta_is_exact() {
        let mut time = Time::new();
        time.set_fixed_delta(Some(1.0 / 60.0));
        for _ in 0..60 {
            time.update();
        }
        assert!((time.elapsed() - 1.0).abs() < 1e-4);
        assert_eq!(time.frame(), 60);
    }
}
