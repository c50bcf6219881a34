//! Edit distance and normalized similarity

/// Levenshtein edit distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`. Characters are Unicode scalar values,
/// so multi-byte letters count as one edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full (m+1) x (n+1) table
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Case-insensitive similarity in `[0, 1]`, where 1 means identical.
///
/// Defined as `1 - distance / longest_length` over the lower-cased strings.
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    let longest = a_lower.chars().count().max(b_lower.chars().count());
    if longest == 0 {
        return 1.0;
    }

    let distance = edit_distance(&a_lower, &b_lower);
    1.0 - distance as f64 / longest as f64
}
