// File: src/fuzzy/similarity.rs
//! Pairwise string comparisons used by the linker.
//!
//! Every predicate works on chars, so multi-byte letters count once.

/// Matched positions of `small` inside `large`, taking the earliest match for each char.
/// Returns `None` when some char of `small` is never matched.
fn greedy_positions(small: &[char], large: &[char]) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(small.len());
    let mut next = 0;
    for &c in small {
        let offset = large[next..].iter().position(|&l| l == c)?;
        positions.push(next + offset);
        next += offset + 1;
    }
    Some(positions)
}

/// Gaps between consecutive matched chars.
fn separations(positions: &[usize]) -> usize {
    positions.windows(2).filter(|w| w[1] != w[0] + 1).count()
}

/// True if `small` is a loosely contiguous subsequence of a strictly longer `large`.
///
/// At most one gap is allowed between consecutively matched characters, or two
/// when both words start with the same character.
pub fn is_subword(small: &str, large: &str) -> bool {
    let small: Vec<char> = small.chars().collect();
    let large: Vec<char> = large.chars().collect();
    is_subword_chars(&small, &large)
}

/// [`is_subword`] over pre-split chars, for callers comparing many pairs.
pub fn is_subword_chars(small: &[char], large: &[char]) -> bool {
    if small.is_empty() || small.len() >= large.len() {
        return false;
    }

    let Some(positions) = greedy_positions(small, large) else {
        return false;
    };
    let gaps = separations(&positions);
    gaps <= 1 || (gaps <= 2 && small[0] == large[0])
}

/// True if `large` is `small` with exactly one character added at either end.
pub fn is_one_char_added(small: &str, large: &str) -> bool {
    let small: Vec<char> = small.chars().collect();
    let large: Vec<char> = large.chars().collect();
    is_one_char_added_chars(&small, &large)
}

pub fn is_one_char_added_chars(small: &[char], large: &[char]) -> bool {
    large.len() == small.len() + 1
        && is_subword_chars(small, large)
        && (large.starts_with(small) || large.ends_with(small))
}

/// Equal length and exactly one differing position.
pub fn are_lexically_close(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    are_lexically_close_chars(&a, &b)
}

pub fn are_lexically_close_chars(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut differences = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}
