//! Injectable random source for the graph builders.
//!
//! All randomness in link rewiring and mock synthesis flows through a `Sampler`
//! handed in by the caller. Each request builds its own sampler, so concurrent
//! callers never share a stream, and tests can script exact draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Index-level random selection.
pub trait Sampler {
    /// Draws `k` distinct indices from `0..len` without replacement.
    /// Returns at most `len` indices.
    fn sample(&mut self, len: usize, k: usize) -> Vec<usize>;

    /// Draws one index uniformly from `0..len`, or `None` when `len == 0`.
    fn choice(&mut self, len: usize) -> Option<usize>;

    /// Picks one element of `items`.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.choice(items.len()).and_then(|i| items.get(i))
    }

    /// Picks `k` distinct elements of `items`, in draw order.
    fn choose_multiple<'a, T>(&mut self, items: &'a [T], k: usize) -> Vec<&'a T>
    where
        Self: Sized,
    {
        self.sample(items.len(), k)
            .into_iter()
            .filter_map(|i| items.get(i))
            .collect()
    }
}

/// `Sampler` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    /// Reproducible stream for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Fresh stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded stream when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn sample(&mut self, len: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, k.min(len)).into_vec()
    }

    fn choice(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

/// Test double that replays pre-recorded draws.
#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;

    use super::Sampler;

    /// Replays scripted `sample` and `choice` results in order. Once a script
    /// runs dry it falls back to the lowest indices.
    #[derive(Debug, Default)]
    pub struct ScriptedSampler {
        samples: VecDeque<Vec<usize>>,
        choices: VecDeque<usize>,
        pub sample_calls: usize,
        pub choice_calls: usize,
    }

    impl ScriptedSampler {
        pub fn new(samples: Vec<Vec<usize>>, choices: Vec<usize>) -> Self {
            Self {
                samples: samples.into(),
                choices: choices.into(),
                ..Default::default()
            }
        }
    }

    impl Sampler for ScriptedSampler {
        fn sample(&mut self, len: usize, k: usize) -> Vec<usize> {
            self.sample_calls += 1;
            self.samples
                .pop_front()
                .unwrap_or_else(|| (0..k.min(len)).collect())
        }

        fn choice(&mut self, len: usize) -> Option<usize> {
            self.choice_calls += 1;
            if len == 0 {
                return None;
            }
            Some(self.choices.pop_front().unwrap_or(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_draws_distinct_indices() {
        let mut sampler = RngSampler::seeded(7);
        for _ in 0..50 {
            let picked = sampler.sample(5, 2);
            assert_eq!(picked.len(), 2);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 2);
            assert!(picked.iter().all(|&i| i < 5));
        }
    }

    #[test]
    fn test_sample_clamps_to_population() {
        let mut sampler = RngSampler::seeded(1);
        assert_eq!(sampler.sample(1, 2).len(), 1);
        assert!(sampler.sample(0, 2).is_empty());
    }

    #[test]
    fn test_choice_on_empty_is_none() {
        let mut sampler = RngSampler::seeded(3);
        assert_eq!(sampler.choice(0), None);
        let empty: [u8; 0] = [];
        assert_eq!(sampler.choose(&empty), None);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RngSampler::seeded(99);
        let mut b = RngSampler::seeded(99);
        let draws_a: Vec<_> = (0..20).map(|_| a.choice(10)).collect();
        let draws_b: Vec<_> = (0..20).map(|_| b.choice(10)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_choose_multiple_maps_indices() {
        let mut sampler = testing::ScriptedSampler::new(vec![vec![2, 0]], vec![]);
        let items = ["a", "b", "c"];
        assert_eq!(sampler.choose_multiple(&items, 2), vec![&"c", &"a"]);
    }
}
