//! Vector arithmetic shared by the store and the analogy queries.

/// Euclidean norm, accumulated in f64.
pub fn norm(v: &[f32]) -> f64 {
    v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt()
}

/// Dot product, accumulated in f64.
pub fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum()
}

/// Norm of an `f64` query vector.
pub fn query_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Dot product of an `f64` query with a stored row.
pub fn query_dot(query: &[f64], row: &[f32]) -> f64 {
    query.iter().zip(row.iter()).map(|(q, r)| q * f64::from(*r)).sum()
}

/// Cosine similarity between two vectors. Zero-norm input yields 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

/// Sum of `positive` minus sum of `negative`, element-wise, in `f64` so
/// large stored components cannot overflow.
///
/// All inputs must share one dimensionality; the result has the length of
/// the first positive term (empty if there is none).
pub fn linear_combination(positive: &[&[f32]], negative: &[&[f32]]) -> Vec<f64> {
    let Some(first) = positive.first() else {
        return Vec::new();
    };
    let mut out: Vec<f64> = first.iter().map(|x| f64::from(*x)).collect();
    for term in &positive[1..] {
        for (o, x) in out.iter_mut().zip(term.iter()) {
            *o += f64::from(*x);
        }
    }
    for term in negative {
        for (o, x) in out.iter_mut().zip(term.iter()) {
            *o -= f64::from(*x);
        }
    }
    out
}
