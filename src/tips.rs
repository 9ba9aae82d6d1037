//! Generic advice shown alongside an evaluation.

use rand::Rng;
use rand::seq::SliceRandom;

pub const TIPS: [&str; 4] = [
    "Add more characters!",
    "Use fun symbols like @ or #!",
    "Mix uppercase and lowercase letters!",
    "Don't use your pet's name! 🐶",
];

/// Picks up to `count` distinct tips in random order.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    TIPS.choose_multiple(rng, count).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_returns_distinct_tips() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample(&mut rng, 2);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
        assert!(picked.iter().all(|t| TIPS.contains(t)));
    }

    #[test]
    fn test_sample_clamps_to_list_size() {
        let mut rng = StdRng::seed_from_u64(2);
        let picked: HashSet<_> = sample(&mut rng, 10).into_iter().collect();
        assert_eq!(picked.len(), TIPS.len());
    }

    #[test]
    fn test_sample_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample(&mut rng, 0).is_empty());
    }
}
