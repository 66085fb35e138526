use rand::RngCore;

/// Tiny deterministic RNG used for matrix generation.
///
/// A 64-bit LCG, reproducible across platforms and releases. Generated
/// graphs are golden-tested against its output, so any change to the
/// constants must bump [`DeterministicRng::ALGORITHM_VERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Version of the stream produced for a given seed.
    pub const ALGORITHM_VERSION: u32 = 1;

    /// Create a new deterministic RNG from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}

impl RngCore for DeterministicRng {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        // High bits of an LCG are the well-mixed ones.
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = DeterministicRng::new(3213);
        let mut b = DeterministicRng::new(3213);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = DeterministicRng::new(1);
        let mut b = DeterministicRng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn first_value_is_pinned() {
        // seed 0 -> state 0x9E37_79B9_7F4A_7C15, one LCG step.
        let mut rng = DeterministicRng::new(0);
        let expected = 0x9E37_79B9_7F4A_7C15_u64
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        assert_eq!(rng.next_u64(), expected);
    }

    #[test]
    fn unit_floats_stay_in_range() {
        let mut rng = DeterministicRng::new(42);
        for _ in 0..1_000 {
            let x: f64 = rng.r#gen();
            assert!((0.0..1.0).contains(&x), "{x} outside [0, 1)");
        }
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut rng = DeterministicRng::new(7);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
