use rand::Rng;

/// Wall coordinates waiting to be considered for carving.
///
/// Duplicates are allowed. An entry may be stale by the time it is popped, so
/// callers must recheck the grid instead of trusting the entry.
#[derive(Debug, Default)]
pub struct Frontier {
    walls: Vec<(u16, u16)>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coord: (u16, u16)) {
        self.walls.push(coord);
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Removes and returns an entry picked uniformly at random, or `None` when empty.
    pub fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(u16, u16)> {
        if self.walls.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.walls.len());
        // O(n), but keeps the remaining entries in insertion order
        Some(self.walls.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pop_random_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_random(&mut rng), None);
    }

    #[test]
    fn test_pop_random_drains_all_entries_with_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut frontier = Frontier::new();
        let pushed = [(1, 2), (2, 1), (1, 2), (3, 3)];
        pushed.iter().for_each(|&c| frontier.push(c));
        assert_eq!(frontier.len(), 4);

        let mut popped = std::iter::from_fn(|| frontier.pop_random(&mut rng)).collect::<Vec<_>>();
        assert!(frontier.is_empty());

        popped.sort();
        let mut expected = pushed.to_vec();
        expected.sort();
        assert_eq!(popped, expected);
    }

    #[test]
    fn test_pop_random_is_reproducible() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut frontier = Frontier::new();
            (0..10).for_each(|i| frontier.push((i, i)));
            std::iter::from_fn(|| frontier.pop_random(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(11), draw(11));
    }
}
