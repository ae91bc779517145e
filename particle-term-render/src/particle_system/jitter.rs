//! Precomputed jitter values consumed round-robin by the rasterizer.

use rand::Rng;

pub const JITTER_TABLE_LEN: usize = 8192;

#[derive(Debug, Clone)]
pub struct JitterTable {
    values: Box<[f32]>,
    cursor: usize,
}

impl JitterTable {
    /// Fill the table with uniform values in `[-1, 1]`.
    pub fn new(rng: &mut impl Rng) -> Self {
        let values = (0..JITTER_TABLE_LEN)
            .map(|_| rng.gen_range(-1.0f32..=1.0))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Next value, wrapping at the end of the table.
    pub fn next(&mut self) -> f32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % JITTER_TABLE_LEN;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_values_in_range_and_wrap() {
        let mut table = JitterTable::new(&mut StdRng::seed_from_u64(7));
        let first = table.next();
        for _ in 1..JITTER_TABLE_LEN {
            let v = table.next();
            assert!((-1.0..=1.0).contains(&v));
        }
        assert_eq!(table.next(), first);
    }
}
