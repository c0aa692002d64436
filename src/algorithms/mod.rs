pub mod generator;
pub mod solver;

use rand::Rng as _;

pub use generator::Generator;
pub use solver::Solver;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Source of the choices made while carving.
pub trait Pick {
    /// Returns index of the chosen option, `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

impl Pick for Random {
    fn pick(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }
}

/// Always takes the first option, carves the same maze every time.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl Pick for FirstAvailable {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn seeded_picks_repeat() {
        let picks = |seed| {
            let mut rng = Random::seed_from_u64(seed);
            (1..50).map(|count| rng.pick(count)).collect::<Vec<_>>()
        };

        assert_eq!(picks(7), picks(7));
        assert!(picks(7).iter().zip(1..).all(|(&pick, count)| pick < count));
    }

    #[test]
    fn first_available() {
        assert_eq!(FirstAvailable.pick(3), 0);
        assert_eq!(FirstAvailable.pick(1), 0);
    }
}
