use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Draws uniformly distributed indexes over the queue's occupied range.
///
/// The generator is seeded once at construction and shared across draws;
/// the uniform distribution is rebuilt whenever the occupied range changes
/// size, so `draw` always covers exactly `[0, len)`.
#[derive(Debug, Clone)]
pub(crate) struct IndexSelector {
    rng: Pcg64Mcg,
    range: Option<Uniform<usize>>,
}

impl IndexSelector {
    pub(crate) fn new(seed: u64) -> Self {
        IndexSelector {
            rng: Pcg64Mcg::seed_from_u64(seed),
            range: None,
        }
    }

    // Rebuild the distribution for a store of `len` elements
    pub(crate) fn refresh(&mut self, len: usize) {
        self.range = if len > 0 {
            Some(Uniform::new(0, len))
        } else {
            None
        };
    }

    // None only when the tracked range is empty
    pub(crate) fn draw(&mut self) -> Option<usize> {
        self.range.as_ref().map(|range| range.sample(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_is_none_until_refreshed() {
        let mut selector = IndexSelector::new(1);
        assert_eq!(selector.draw(), None);
        selector.refresh(0);
        assert_eq!(selector.draw(), None);
    }

    #[test]
    fn draw_stays_in_range() {
        let mut selector = IndexSelector::new(7);
        selector.refresh(5);
        for _ in 0..1000 {
            let index = selector.draw().unwrap();
            assert!(index < 5);
        }
        selector.refresh(1);
        for _ in 0..100 {
            assert_eq!(selector.draw(), Some(0));
        }
    }
}
