//! Word-level text helpers.

/// Title-case each whitespace-separated word: first character upper, the
/// rest lower. Words are re-joined with single spaces.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("bangkok MARRIOTT"), "Bangkok Marriott");
        assert_eq!(title_case("grand\n  hyatt"), "Grand Hyatt");
        assert_eq!(title_case(""), "");
    }
}
