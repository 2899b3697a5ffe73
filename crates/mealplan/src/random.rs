use rand::Rng;

/// Source of uniform picks for recipe sampling.
///
/// Every `rand::Rng` is a source, so callers pass `rand::rng()` or a seeded
/// `StdRng`; tests can script the exact indices instead.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let Some(pick) = self.picks.get(self.cursor % self.picks.len().max(1)) else {
            return 0;
        };

        self.cursor += 1;

        pick % len
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rng_picks_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..20 {
            assert!(rng.pick_index(len) < len);
        }
    }

    #[test]
    fn scripted_source_wraps() {
        let mut source = ScriptedSource::new(vec![1, 5]);
        assert_eq!(source.pick_index(3), 1);
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.pick_index(3), 1);
    }

    #[test]
    fn empty_script_always_picks_first() {
        let mut source = ScriptedSource::new(Vec::new());
        assert_eq!(source.pick_index(4), 0);
        assert_eq!(source.pick_index(4), 0);
    }
}
