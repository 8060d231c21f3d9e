//! Decides, tick by tick, whether the typing animator moves forward.
//!
//! Hesitating only changes when characters appear, never which ones.

pub trait Cadence: Send {
    /// True when the current tick should reveal a character.
    fn should_advance(&mut self) -> bool;
}

pub type CadenceBox = Box<dyn Cadence>;

/// Minimal deterministic PRNG. No external `rand` crate needed.
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

/// Irregular typing: each tick has `skip_percent` chance of hesitating.
pub struct JitterCadence {
    rng: Xorshift32,
    skip_percent: u32,
}

impl JitterCadence {
    pub fn new(seed: u32, skip_percent: u32) -> JitterCadence {
        return JitterCadence {
            rng: Xorshift32::new(seed),
            skip_percent: skip_percent.min(100),
        };
    }

    /// Seeded from the wall clock.
    pub fn from_clock(skip_percent: u32) -> JitterCadence {
        let seed = chrono::Utc::now().timestamp_subsec_nanos();
        return JitterCadence::new(seed, skip_percent);
    }
}

impl Cadence for JitterCadence {
    fn should_advance(&mut self) -> bool {
        self.rng.next() % 100 >= self.skip_percent
    }
}

/// Advances on every tick.
#[derive(Default)]
pub struct SteadyCadence;

impl Cadence for SteadyCadence {
    fn should_advance(&mut self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_always_advances() {
        let mut cadence = SteadyCadence;
        assert!((0..1000).all(|_| cadence.should_advance()));
    }

    #[test]
    fn test_jitter_is_deterministic_for_a_seed() {
        let mut a = JitterCadence::new(42, 10);
        let mut b = JitterCadence::new(42, 10);
        let run_a: Vec<bool> = (0..200).map(|_| a.should_advance()).collect();
        let run_b: Vec<bool> = (0..200).map(|_| b.should_advance()).collect();
        assert_eq!(run_a, run_b);
    }

    #[test]
    fn test_jitter_mostly_advances() {
        let mut cadence = JitterCadence::new(7, 10);
        let advanced = (0..10_000).filter(|_| cadence.should_advance()).count();
        assert!(advanced > 8_500, "advanced {advanced} of 10000");
        assert!(advanced < 9_500, "advanced {advanced} of 10000");
    }

    #[test]
    fn test_jitter_bounds() {
        let mut never_skips = JitterCadence::new(3, 0);
        assert!((0..1000).all(|_| never_skips.should_advance()));

        let mut always_skips = JitterCadence::new(3, 250);
        assert!((0..1000).all(|_| !always_skips.should_advance()));
    }
}
