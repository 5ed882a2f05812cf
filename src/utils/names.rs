/// Join a first and last name for display.
///
/// Whitespace-only parts count as missing; `None` when neither part is usable.
pub fn concat_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let first = first_name.map(str::trim).filter(|s| !s.is_empty());
    let last = last_name.map(str::trim).filter(|s| !s.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        (Some(single), None) | (None, Some(single)) => Some(single.to_string()),
        (None, None) => None,
    }
}
