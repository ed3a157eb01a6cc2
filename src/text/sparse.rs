/// Sparse feature vector with strictly increasing indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from `(index, value)` pairs, summing duplicates and
    /// dropping zeros.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut entries: Vec<(usize, f64)> = pairs.into_iter().collect();
        entries.sort_by_key(|&(i, _)| i);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (i, v) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == i => *acc += v,
                _ => merged.push((i, v)),
            }
        }
        merged.retain(|&(_, v)| v != 0.0);
        Self { entries: merged }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Scales to unit L2 norm. The empty vector stays empty.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n > 0.0 {
            for (_, v) in &mut self.entries {
                *v /= n;
            }
        }
    }

    /// Dot product with a dense row; indices past the row's end count as zero.
    #[inline]
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_duplicates_and_sorts() {
        let v = SparseVector::from_pairs([(3, 1.0), (1, 2.0), (3, 0.5), (2, 0.0)]);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(1, 2.0), (3, 1.5)]);
        assert_eq!(v.get(3), 1.5);
        assert_eq!(v.get(2), 0.0);
    }

    #[test]
    fn normalize_to_unit_length() {
        let mut v = SparseVector::from_pairs([(0, 3.0), (5, 4.0)]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0) - 0.6).abs() < 1e-12);

        let mut empty = SparseVector::default();
        empty.normalize();
        assert!(empty.is_empty());
    }

    #[test]
    fn dot_ignores_out_of_range() {
        let v = SparseVector::from_pairs([(0, 1.0), (2, 2.0), (9, 5.0)]);
        assert_eq!(v.dot(&[1.0, 1.0, 0.5]), 2.0);
    }
}
