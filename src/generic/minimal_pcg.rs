//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal PCG32 generator from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! Each [context](crate::context) stores a source of randomness, used to make random decisions and to choose a polarity.
//! The context is paramaterised by anything which satisfies [Rng](rand::Rng) and [Default], though the library fixes the source as [MinimalPCG32].

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// The multiplier of the linear congruential step.
const MULTIPLIER: u64 = 6364136223846793005;

/// The stream selected when seeding.
const STREAM: u64 = 54;

/// State and increment.
pub struct MinimalPCG32 {
    state: u64,
    /// Always odd.
    inc: u64,
}

impl MinimalPCG32 {
    fn step(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::from_seed(0_u64.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut pcg = MinimalPCG32 {
            state: 0,
            inc: (STREAM << 1) | 1,
        };
        pcg.step();
        pcg.state = pcg.state.wrapping_add(u64::from_le_bytes(seed));
        pcg.step();
        pcg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_stream() {
        // The first outputs of the pcg32 demo, seeded with 42 on stream 54.
        let mut pcg = MinimalPCG32::from_seed(42_u64.to_le_bytes());
        assert_eq!(pcg.next_u32(), 0xa15c02b7);
        assert_eq!(pcg.next_u32(), 2068313097);
        assert_eq!(pcg.next_u32(), 3122475824);
        assert_eq!(pcg.next_u32(), 2211639955);
        assert_eq!(pcg.next_u32(), 3215226955);
    }

    #[test]
    fn wide_output() {
        let mut pcg = MinimalPCG32::from_seed(42_u64.to_le_bytes());
        assert_eq!(pcg.next_u64(), 8883337112210637495);
        assert_eq!(pcg.next_u64(), 9498921280374387504);
    }

    #[test]
    fn default_is_zero_seed() {
        let mut pcg = MinimalPCG32::default();
        assert_eq!(pcg.next_u32(), 1203932051);
        assert_eq!(pcg.next_u32(), 3113183783);
    }
}
