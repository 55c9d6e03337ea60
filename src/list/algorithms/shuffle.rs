use crate::list::{move_node, next_of};
use crate::List;
use rand::Rng;

/// Fisher-Yates over the list: the unshuffled prefix shrinks by one each
/// round, and a uniformly chosen node from it moves to the tail.
pub(super) fn shuffle<T, R: Rng + ?Sized>(list: &mut List<T>, rng: &mut R) {
    let len = list.len();
    let ghost = list.ghost_node();
    for remaining in (2..=len).rev() {
        let index = rng.random_range(0..remaining);
        let mut node = list.front_node();
        // SAFETY: `index < remaining <= len`, so `node` is a non-ghost node.
        unsafe {
            for _ in 0..index {
                node = next_of(node);
            }
            move_node(node, ghost);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{assert_well_formed, List};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for len in 0..6 {
            let mut list = List::from_iter(0..len);
            list.shuffle_with(&mut rng);
            assert_well_formed(&list);
            let mut values = Vec::from_iter(list);
            values.sort();
            assert_eq!(values, Vec::from_iter(0..len));
        }
    }

    #[test]
    fn shuffle_is_uniform() {
        const ROUNDS: usize = 24_000;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = HashMap::new();
        for _ in 0..ROUNDS {
            let mut list = List::from_iter(['a', 'b', 'c', 'd']);
            list.shuffle_with(&mut rng);
            *counts.entry(String::from_iter(list)).or_insert(0_usize) += 1;
        }
        // All 24 permutations show up, each close to 1000 times.
        assert_eq!(counts.len(), 24);
        let expected = (ROUNDS / 24) as f64;
        let chi_squared: f64 = counts
            .values()
            .map(|&count| (count as f64 - expected).powi(2) / expected)
            .sum();
        // 23 degrees of freedom, p = 0.001.
        assert!(chi_squared < 49.73, "chi squared {chi_squared}");
    }
}
