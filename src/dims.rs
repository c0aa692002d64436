use std::ops::{Add, Sub};

/// Position or size on the grid, `Dims(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates over all positions in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_fill_is_row_major() {
        let all: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(all, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }

    #[test]
    fn iter_fill_empty() {
        assert_eq!(Dims::iter_fill(Dims::ZERO, Dims(0, 3)).count(), 0);
    }

    #[test]
    fn arithmetic() {
        let pos = Dims(3, 4) + Dims(-1, 1);
        assert_eq!(pos, Dims(2, 5));
        assert_eq!(pos - Dims::ONE, Dims(1, 4));
        assert!(Dims(1, 4).all_positive());
        assert!(!Dims(0, 5).all_positive());
        assert!(!Dims(3, -1).all_positive());
    }
}
