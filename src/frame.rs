//! Frame timing: per-frame delta, one-second fps windows and cursor blink.

use std::time::{Duration, Instant};

/// Longest frame delta handed to the physics step.
const MAX_DELTA: Duration = Duration::from_millis(100);

/// Measures frame deltas and reports the frame rate once per second.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    window_start: Instant,
    frames_in_window: u32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            window_start: now,
            frames_in_window: 0,
        }
    }

    /// Record a frame at `now`.
    ///
    /// Returns the clamped delta in seconds, plus the measured fps when a
    /// one-second window just closed.
    pub fn tick(&mut self, now: Instant) -> (f32, Option<f32>) {
        let dt = now.saturating_duration_since(self.last_frame).min(MAX_DELTA);
        self.last_frame = now;
        self.frames_in_window += 1;

        let window = now.saturating_duration_since(self.window_start);
        let fps = if window >= Duration::from_secs(1) {
            let fps = self.frames_in_window as f32 / window.as_secs_f32();
            self.window_start = now;
            self.frames_in_window = 0;
            Some(fps)
        } else {
            None
        };
        (dt.as_secs_f32(), fps)
    }
}

/// Asymmetric cursor blink: long visible phase, short hidden phase.
#[derive(Debug)]
pub struct CursorBlink {
    on: Duration,
    off: Duration,
    visible: bool,
    phase_start: Instant,
}

impl CursorBlink {
    pub fn new(on_ms: u64, off_ms: u64, now: Instant) -> Self {
        Self {
            on: Duration::from_millis(on_ms.max(1)),
            off: Duration::from_millis(off_ms.max(1)),
            visible: true,
            phase_start: now,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Advance to `now`; returns true when visibility flipped.
    pub fn update(&mut self, now: Instant) -> bool {
        let phase = if self.visible { self.on } else { self.off };
        if now.saturating_duration_since(self.phase_start) < phase {
            return false;
        }
        self.visible = !self.visible;
        self.phase_start = now;
        true
    }

    /// Show the cursor and restart the visible phase, e.g. after a keypress.
    pub fn reset(&mut self, now: Instant) {
        self.visible = true;
        self.phase_start = now;
    }

    /// When the next flip is due.
    pub fn next_flip(&self) -> Instant {
        self.phase_start + if self.visible { self.on } else { self.off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_reported_once_per_second() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let mut reported = Vec::new();
        for i in 1..=120 {
            let (dt, fps) = clock.tick(start + Duration::from_millis(i * 10));
            assert!((dt - 0.01).abs() < 1e-4);
            reported.extend(fps);
        }
        assert_eq!(reported.len(), 1);
        assert!((reported[0] - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_delta_is_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let (dt, _) = clock.tick(start + Duration::from_secs(3));
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_blink_is_asymmetric() {
        let start = Instant::now();
        let mut blink = CursorBlink::new(1000, 200, start);
        assert!(!blink.update(start + Duration::from_millis(999)));
        assert!(blink.update(start + Duration::from_millis(1000)));
        assert!(!blink.visible());
        assert!(!blink.update(start + Duration::from_millis(1150)));
        assert!(blink.update(start + Duration::from_millis(1200)));
        assert!(blink.visible());
    }

    #[test]
    fn test_reset_shows_cursor() {
        let start = Instant::now();
        let mut blink = CursorBlink::new(1000, 200, start);
        blink.update(start + Duration::from_millis(1000));
        blink.reset(start + Duration::from_millis(1050));
        assert!(blink.visible());
        assert_eq!(blink.next_flip(), start + Duration::from_millis(2050));
    }
}
