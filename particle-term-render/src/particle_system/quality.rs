//! Adaptive glow against a target frame rate.

use super::ParticleSystem;

const GLOW_FLOOR: f32 = 0.5;
const GLOW_CEILING: f32 = 2.0;

/// Next glow intensity given the measured and target frame rates.
pub fn adjusted_glow(glow: f32, fps: f32, target_fps: f32) -> f32 {
    if fps < target_fps * 0.9 {
        (glow * 0.9).max(GLOW_FLOOR)
    } else if fps > target_fps * 1.1 {
        (glow * 1.05).min(GLOW_CEILING)
    } else {
        glow
    }
}

impl ParticleSystem {
    /// Called once per measured second.
    pub fn adjust_quality(&mut self, fps: f32, target_fps: f32) {
        let glow = adjusted_glow(self.settings.glow_intensity, fps, target_fps);
        if glow != self.settings.glow_intensity {
            log::debug!(
                "Adaptive quality: {:.1} fps (target {:.0}), glow {:.2} -> {:.2}",
                fps,
                target_fps,
                self.settings.glow_intensity,
                glow
            );
            self.settings.glow_intensity = glow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_frames_reduce_glow_to_floor() {
        let mut glow = 1.0;
        for _ in 0..20 {
            glow = adjusted_glow(glow, 60.0, 120.0);
        }
        assert_eq!(glow, GLOW_FLOOR);
    }

    #[test]
    fn test_fast_frames_raise_glow_to_ceiling() {
        assert!((adjusted_glow(1.0, 200.0, 120.0) - 1.05).abs() < 1e-6);
        assert_eq!(adjusted_glow(1.99, 200.0, 120.0), GLOW_CEILING);
    }

    #[test]
    fn test_in_band_is_unchanged() {
        assert_eq!(adjusted_glow(1.3, 115.0, 120.0), 1.3);
        assert_eq!(adjusted_glow(1.3, 130.0, 120.0), 1.3);
    }
}
