//! City autocomplete over a built-in suggestion list.

/// Built-in suggestions offered before the user has a search history.
pub const DEFAULT_CITIES: &[&str] = &["New York", "London", "Delhi", "Mumbai", "Tokyo", "Sydney"];

/// Case-insensitive substring filter over `cities`, preserving list order.
/// Empty input yields no suggestions.
pub fn suggestions<'a>(input: &str, cities: &[&'a str]) -> Vec<&'a str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    cities
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .copied()
        .collect()
}
