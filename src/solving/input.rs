//! Keystroke normalization
//!
//! Players type into a cell one letter at a time. Whatever arrives is reduced
//! to a single uppercase A-Z letter, or to nothing (a deletion).

/// Reduce raw input to the letter stored in a cell
///
/// The first letter found wins; digits, punctuation and anything after the
/// first letter are dropped. Accented Latin letters fold to their base letter.
///
/// # Examples
/// ```
/// use crossword_engine::solving::normalize_input;
///
/// assert_eq!(normalize_input("a1"), Some('A'));
/// assert_eq!(normalize_input("é"), Some('E'));
/// assert_eq!(normalize_input("42"), None);
/// assert_eq!(normalize_input(""), None);
/// ```
#[must_use]
pub fn normalize_input(input: &str) -> Option<char> {
    input.chars().find_map(fold_letter)
}

/// Map a character to an uppercase ASCII letter if it is one (or an accented form of one)
fn fold_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        return Some(c.to_ascii_uppercase());
    }

    let base = match c.to_lowercase().next()? {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'A',
        'ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'I',
        'ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'œ' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'U',
        'ý' | 'ÿ' => 'Y',
        _ => return None,
    };
    Some(base)
}
