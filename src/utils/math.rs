/// Numerically stable softmax. Non-finite scores get zero mass; an input with
/// no finite score yields an empty vector.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Vec::new();
    }
    let exps: Vec<f64> = scores
        .iter()
        .map(|&s| if s.is_finite() { (s - max).exp() } else { 0.0 })
        .collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Index of the largest finite value; the first one wins ties.
#[inline]
pub fn argmax(v: &[f64]) -> Option<usize> {
    let mut best = None;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &x) in v.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        if best.is_none() || x > best_value {
            best = Some(i);
            best_value = x;
        }
    }
    best
}
