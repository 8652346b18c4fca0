//! Parsing of `launchctl list` output.

/// One row of `launchctl list`: `PID<TAB>Status<TAB>Label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub raw: &'a str,
    pub label: &'a str,
}

impl StatusLine<'_> {
    /// The row with tabs replaced by single spaces.
    #[must_use]
    pub fn condensed(&self) -> String {
        self.raw.replace('\t', " ")
    }
}

/// Splits `launchctl list` output into rows, skipping malformed ones.
pub fn parse_list(output: &str) -> impl Iterator<Item = StatusLine<'_>> {
    output.lines().filter_map(|raw| {
        let label = raw.split('\t').nth(2)?;
        Some(StatusLine { raw, label })
    })
}
