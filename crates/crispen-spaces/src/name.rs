//! Name comparison shared by every lookup in the crate.
//!
//! Color space names are matched case-insensitively using ASCII case folding,
//! so results never depend on the process locale.

/// Returns `true` when two color space names identify the same color space.
///
/// Empty names never match anything, including another empty name.
pub fn names_match(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && a.eq_ignore_ascii_case(b)
}

/// Returns `true` when `name` cannot identify a color space.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
