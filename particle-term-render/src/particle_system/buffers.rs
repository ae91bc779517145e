//! Structure-of-arrays particle store and dirty-range tracking.

/// Target x of a hidden particle; far enough off-screen to never be drawn.
pub const HIDDEN_TARGET_X: f32 = -10000.0;

/// Bytes per particle per array (`[f32; 4]`).
pub const PARTICLE_STRIDE: u64 = 16;

/// Five parallel particle arrays.
///
/// `position.w` is the rendered size (0 = inactive), `target.w` the size the
/// particle grows toward, `extra.x` the animation phase flag.
#[derive(Debug, Default)]
pub struct ParticleBuffers {
    pub position: Vec<[f32; 4]>,
    pub velocity: Vec<[f32; 4]>,
    pub target: Vec<[f32; 4]>,
    pub color: Vec<[f32; 4]>,
    pub extra: Vec<[f32; 4]>,
}

impl ParticleBuffers {
    /// Number of particles in use.
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Resize every array to `count` and zero all of them.
    pub fn reset(&mut self, count: usize) {
        for array in [
            &mut self.position,
            &mut self.velocity,
            &mut self.target,
            &mut self.color,
            &mut self.extra,
        ] {
            array.clear();
            array.resize(count, [0.0; 4]);
        }
    }

    /// Make a slot inactive: zero size, off-screen target, no velocity.
    pub fn hide(&mut self, idx: usize) {
        self.position[idx][3] = 0.0;
        self.target[idx][0] = HIDDEN_TARGET_X;
        self.target[idx][3] = 0.0;
        self.velocity[idx] = [0.0; 4];
    }

    /// Full reset of a slot before a different glyph is drawn into it.
    pub fn clear_slot(&mut self, idx: usize) {
        self.hide(idx);
        self.extra[idx] = [0.0; 4];
    }

    pub fn is_visible(&self, idx: usize) -> bool {
        self.position[idx][3] > 0.0
    }

    /// Count of particles with a nonzero size.
    pub fn visible_count(&self) -> usize {
        self.position.iter().filter(|p| p[3] > 0.0).count()
    }
}

/// Inclusive span of particle indices written this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyRange {
    span: Option<(usize, usize)>,
}

impl DirtyRange {
    pub fn clear(&mut self) {
        self.span = None;
    }

    /// Widen the range to include `first..=last`.
    pub fn mark(&mut self, first: usize, last: usize) {
        self.span = Some(match self.span {
            Some((lo, hi)) => (lo.min(first), hi.max(last)),
            None => (first, last),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// `(first, last)` particle indices, both inclusive.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.span
    }

    /// Byte offset and length to upload, clamped to an array of `len` particles.
    pub fn byte_range(&self, len: usize) -> Option<(u64, u64)> {
        let (first, last) = self.span?;
        if first >= len {
            return None;
        }
        let start = first as u64 * PARTICLE_STRIDE;
        let end = ((last as u64 + 1) * PARTICLE_STRIDE).min(len as u64 * PARTICLE_STRIDE);
        Some((start, end - start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_zeroes_and_resizes() {
        let mut buffers = ParticleBuffers::default();
        buffers.reset(4);
        buffers.position[2] = [1.0, 2.0, 3.0, 4.0];
        buffers.reset(8);
        assert_eq!(buffers.len(), 8);
        assert!(buffers.position.iter().all(|p| *p == [0.0; 4]));
    }

    #[test]
    fn test_hide_sets_sentinel() {
        let mut buffers = ParticleBuffers::default();
        buffers.reset(1);
        buffers.position[0][3] = 2.0;
        buffers.velocity[0] = [5.0, 5.0, 0.0, 0.0];
        buffers.hide(0);
        assert!(!buffers.is_visible(0));
        assert_eq!(buffers.target[0][0], HIDDEN_TARGET_X);
        assert_eq!(buffers.velocity[0], [0.0; 4]);
    }

    #[test]
    fn test_dirty_range_widens() {
        let mut dirty = DirtyRange::default();
        assert!(dirty.is_empty());
        dirty.mark(10, 20);
        dirty.mark(5, 7);
        dirty.mark(15, 30);
        assert_eq!(dirty.bounds(), Some((5, 30)));
    }

    #[test]
    fn test_byte_range_clamps_to_length() {
        let mut dirty = DirtyRange::default();
        dirty.mark(2, 100);
        assert_eq!(dirty.byte_range(10), Some((32, 128)));
        dirty.clear();
        dirty.mark(20, 30);
        assert_eq!(dirty.byte_range(10), None);
    }
}
