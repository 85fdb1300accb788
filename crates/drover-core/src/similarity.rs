/// Similarity ratio between two strings based on their longest common
/// subsequence: `2 * LCS(a, b) / (|a| + |b|)`.
///
/// The result is in `[0.0, 1.0]`, symmetric in its arguments, and `1.0`
/// for identical strings. Two empty strings are defined as identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // Classic LCS dynamic program with a rolling row
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ch_a in &a {
        for (j, &ch_b) in b.iter().enumerate() {
            curr[j + 1] = if ch_a == ch_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let matched = prev[b.len()];
    2.0 * matched as f64 / total as f64
}
