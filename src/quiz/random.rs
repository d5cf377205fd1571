use rand::Rng;

/// Source of uniformly distributed indices used for shuffling.
pub trait RandomSource {
    /// Returns an index in `0..bound`. Callers never pass a zero bound.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Values at or above the requested bound are clamped to `bound - 1`, so
/// [`ScriptedSource::identity`] leaves every shuffle in its input order.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return bound - 1;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.min(bound - 1)
    }
}

/// Fisher-Yates shuffle driven by `rng`; every permutation is equally likely
/// when `rng` is uniform.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_identity_source_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut items, &mut ScriptedSource::identity());
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_source_rotates() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut ScriptedSource::new(vec![0]));
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut ScriptedSource::new(vec![0]));
        assert!(empty.is_empty());

        let mut single = vec![7];
        shuffle(&mut single, &mut ScriptedSource::new(vec![0]));
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_covers_all_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..6000 {
            let mut items = vec![0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        // Expected ~1000 each; allow generous slack.
        assert!(counts.values().all(|&c| (800..1200).contains(&c)));
    }
}
