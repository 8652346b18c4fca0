//! `lunchy help`

use clap::CommandFactory;

use crate::cli::Cli;

/// One-line banner printed above the usage.
#[must_use]
pub fn banner() -> String {
    format!(
        "Lunchy {}, the friendly launchctl wrapper",
        env!("CARGO_PKG_VERSION")
    )
}

/// Print the banner and the generated usage.
pub fn run() {
    println!("{}", banner());
    println!("{}", Cli::command().render_help());
}
