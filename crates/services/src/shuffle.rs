use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items`; the input is left untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn keeps_input_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let out = shuffled(&input, &mut rng);

        assert_eq!(input, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn same_seed_same_permutation() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffled(&input, &mut StdRng::seed_from_u64(42));
        let b = shuffled(&input, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn permutations_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 60_000;
        let mut counts: HashMap<Vec<char>, u32> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(shuffled(&['a', 'b', 'c'], &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        // Expected 10_000 each; allow a generous 5% band.
        for (perm, count) in counts {
            assert!((9_500..=10_500).contains(&count), "{perm:?} seen {count} times");
        }
    }

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&["x"], &mut rng), vec!["x"]);
    }
}
