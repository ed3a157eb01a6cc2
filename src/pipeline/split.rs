use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Seeded train/test split that never starves a label.
///
/// The test partition gets `ceil(test_fraction * n)` items, drawn in the
/// order of a shuffle seeded with `seed`. An item is only moved to the test
/// side while its label keeps at least one training item, so the test
/// partition can come out smaller than requested on tiny or skewed inputs.
///
/// Returns `(train, test)`; both keep the shuffled order.
pub fn train_test_split<'a, T, F>(
    items: &'a [T],
    test_fraction: f64,
    seed: u64,
    label_of: F,
) -> (Vec<&'a T>, Vec<&'a T>)
where
    F: Fn(&T) -> usize,
{
    let n = items.len();
    let n_test = ((test_fraction.clamp(0.0, 1.0) * n as f64).ceil() as usize).min(n);

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let mut remaining: HashMap<usize, usize> = HashMap::new();
    for item in items {
        *remaining.entry(label_of(item)).or_insert(0) += 1;
    }

    let mut train = Vec::with_capacity(n - n_test);
    let mut test = Vec::with_capacity(n_test);
    for i in order {
        let item = &items[i];
        let left = remaining.entry(label_of(item)).or_insert(0);
        if test.len() < n_test && *left > 1 {
            *left -= 1;
            test.push(item);
        } else {
            train.push(item);
        }
    }

    tracing::debug!(
        requested = n_test,
        train = train.len(),
        test = test.len(),
        "train/test split"
    );
    (train, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn identity(x: &usize) -> usize {
        *x % 3
    }

    #[test]
    fn eighty_twenty_on_twenty_items() {
        let items: Vec<usize> = (0..20).collect();
        let (train, test) = train_test_split(&items, 0.2, 42, identity);
        assert_eq!(train.len(), 16);
        assert_eq!(test.len(), 4);

        let all: HashSet<usize> = train.iter().chain(&test).map(|x| **x).collect();
        assert_eq!(all.len(), 20);
    }

    #[test]
    fn same_seed_same_split() {
        let items: Vec<usize> = (0..50).collect();
        let a = train_test_split(&items, 0.2, 7, identity);
        let b = train_test_split(&items, 0.2, 7, identity);
        assert_eq!(a, b);
    }

    #[test]
    fn singleton_label_stays_in_training() {
        // One item with label 1, everything else label 0.
        let items: Vec<usize> = (0..10).collect();
        let label = |x: &usize| if *x == 3 { 1 } else { 0 };
        for seed in 0..20 {
            let (train, test) = train_test_split(&items, 0.5, seed, label);
            assert!(train.iter().any(|x| **x == 3));
            assert_eq!(test.len(), 5);
        }
    }

    #[test]
    fn test_side_shrinks_when_labels_cannot_spare_items() {
        let items: Vec<usize> = (0..3).collect();
        let (train, test) = train_test_split(&items, 0.9, 1, identity);
        assert_eq!(train.len(), 3);
        assert!(test.is_empty());
    }

    #[test]
    fn zero_fraction_and_empty_input() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test) = train_test_split(&items, 0.0, 42, identity);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());

        let none: Vec<usize> = Vec::new();
        let (train, test) = train_test_split(&none, 0.2, 42, identity);
        assert!(train.is_empty() && test.is_empty());
    }
}
