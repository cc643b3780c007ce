//! Shared-letter search between two words

/// Find every pair of positions where `a` and `b` hold the same letter
///
/// Pairs are `(position_in_a, position_in_b)`, ordered by position in `a`
/// and then by position in `b`.
///
/// # Examples
/// ```
/// use crossword_engine::generator::find_intersections;
///
/// assert_eq!(find_intersections("CHAT", "TABLE"), vec![(2, 1), (3, 0)]);
/// assert!(find_intersections("OR", "SEL").is_empty());
/// ```
#[must_use]
pub fn find_intersections(a: &str, b: &str) -> Vec<(usize, usize)> {
    let b = b.as_bytes();

    a.bytes()
        .enumerate()
        .flat_map(|(i, letter)| {
            b.iter()
                .enumerate()
                .filter(move |&(_, &other)| other == letter)
                .map(move |(j, _)| (i, j))
        })
        .collect()
}
