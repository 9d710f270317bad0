//! Labels recording where a sequence came from. These strings end up in the
//! header lines of the output, so downstream benchmarks can recover the truth.

/// `{otu}@{identifier}`
pub fn label(otu: &str, identifier: &str) -> String {
    format!("{otu}@{identifier}")
}

/// Identifier of a sequence moved away from `original_otu`.
pub fn swapped_identifier(identifier: &str, original_otu: &str) -> String {
    format!("{identifier}_from_{original_otu}")
}

/// Identifier of a noised copy of a sequence of `receiver`.
pub fn contaminated_identifier(identifier: &str, receiver: &str, substitutions: usize) -> String {
    format!("{identifier}_contaminated_{receiver}_{substitutions}_subs")
}
