use rand::Rng as _;

/// Source of uniform samples in `[0, 1)` for templates that jitter (currently `glitch`).
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic SplitMix64 stream.
#[derive(Clone, Copy, Debug)]
pub struct SeededJitter {
    state: u64,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent stream for one frame, so frames can be evaluated in any order.
    pub fn for_frame(seed: u64, frame: u64) -> Self {
        Self::new(seed ^ frame.wrapping_mul(0xD6E8_FEB8_6659_FD93))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl JitterSource for SeededJitter {
    fn next_unit(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Thread-local system randomness; the production default.
#[derive(Default)]
pub struct SystemJitter {
    rng: rand::rngs::ThreadRng,
}

impl std::fmt::Debug for SystemJitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SystemJitter")
    }
}

impl JitterSource for SystemJitter {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Always returns the same sample; handy for pinning jittered output.
#[derive(Clone, Copy, Debug)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/jitter.rs"]
mod tests;
