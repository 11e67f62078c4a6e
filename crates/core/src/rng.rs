//! RNG module - deterministic randomness for the simulations
//!
//! Every random decision in the arcade (tetromino draw, apple respawn,
//! pipe gap placement, card/tile shuffles) goes through one small LCG so
//! that a seed fully determines a run. Tests pass fixed seeds; the binary
//! seeds from the clock at game start.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // Keep 24 bits so the quotient is exact; a full-width divide
        // rounds values near u32::MAX up to 1.0.
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Generate a float in [min, max)
    pub fn next_f32_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(19) < 19);
        }
    }

    #[test]
    fn test_next_f32_stays_in_unit_interval() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_next_f32_stays_below_one_at_max_output() {
        // This state makes the next draw exactly u32::MAX.
        let mut rng = SimpleRng { state: 653637408 };
        assert_eq!(rng.next_u32(), u32::MAX);
        let mut rng = SimpleRng { state: 653637408 };
        let v = rng.next_f32();
        assert!(v < 1.0, "draw at u32::MAX must stay below 1.0: {v}");
    }

    #[test]
    fn test_next_f32_range_respects_bounds() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..1000 {
            let v = rng.next_f32_range(50.0, 130.0);
            assert!((50.0..130.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_shuffle_keeps_all_elements() {
        let mut rng = SimpleRng::new(42);
        let mut cards = [0u8, 1, 2, 3, 4, 5, 6, 7];
        rng.shuffle(&mut cards);
        let mut sorted = cards;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
