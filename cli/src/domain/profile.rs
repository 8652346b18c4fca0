//! `.lunchy` profile parsing.
//!
//! A profile is a plain-text list of name fragments, one per line, used as
//! the default batch target when `start`/`stop`/`restart` get no argument.

/// File name of the profile, looked up in the current working directory.
pub const PROFILE_FILE: &str = ".lunchy";

/// Extracts the fragments from profile text.
///
/// Lines are trimmed; blank lines and lines starting with `#` are dropped.
/// Empty fragments never survive, so a profile can't select every descriptor
/// through an empty substring.
#[must_use]
pub fn parse_profile(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
