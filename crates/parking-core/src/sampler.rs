//! Throttles raw pointer moves into path points.

/// Default throttle factor: every fifth move becomes a path point.
pub const DEFAULT_THROTTLE_STEP: u32 = 5;

/// Counter-based gate shared by every recording car.
///
/// The counter is global: two cars recording at once advance the same
/// counter, once per car per move.
#[derive(Debug, Clone)]
pub struct CoordinateSampler {
    step: u32,
    count: u64,
}

impl CoordinateSampler {
    /// Creates a sampler accepting every `step`-th move. A zero step is
    /// treated as 1.
    pub fn new(step: u32) -> Self {
        Self {
            step: step.max(1),
            count: 0,
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Counts one move and reports whether it should be recorded.
    pub fn accept(&mut self) -> bool {
        self.count += 1;
        self.count % u64::from(self.step) == 0
    }
}

impl Default for CoordinateSampler {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fifth_move() {
        let mut sampler = CoordinateSampler::default();
        let accepted: Vec<u32> = (1..=15).filter(|_| sampler.accept()).collect();
        assert_eq!(accepted, vec![5, 10, 15]);

        let mut sampler = CoordinateSampler::default();
        let pattern: Vec<bool> = (0..10).map(|_| sampler.accept()).collect();
        assert_eq!(
            pattern,
            vec![false, false, false, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_step_one_accepts_everything() {
        let mut sampler = CoordinateSampler::new(1);
        assert!((0..4).all(|_| sampler.accept()));

        let mut zero = CoordinateSampler::new(0);
        assert_eq!(zero.step(), 1);
        assert!(zero.accept());
    }
}
