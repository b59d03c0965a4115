//! Helpers for optional string fields that fall back to caller-supplied defaults.

/// Returns the first non-empty candidate, or `""` when all are empty.
pub fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Returns `value` unless it equals the type's default, in which case `fallback`.
pub fn or_default<T>(value: T, fallback: T) -> T
where
    T: Default + PartialEq,
{
    if value == T::default() { fallback } else { value }
}
