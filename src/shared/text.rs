/// Case-insensitive substring match. An empty or blank needle matches.
pub fn contains_ci(hay: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || hay.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any of the fields contains the needle.
pub fn any_contains_ci(fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|field| contains_ci(field, needle))
}

#[test]
fn contains_ignores_case() {
    assert!(contains_ci("Chandigarh - Amritsar Express", "amrit"));
    assert!(contains_ci("Ludhiana", "  "));
    assert!(!contains_ci("Ludhiana", "patiala"));
}
