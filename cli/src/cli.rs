//! CLI argument parsing with clap derive
//!
//! Parsing yields a `Command`; `Command::into_handler` validates the
//! argument shape each verb needs and produces the `Handler` that
//! `commands::dispatch` runs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::domain::action::LifecycleAction;
use crate::domain::error::LunchyError;
use crate::infra::config::ConfigOverrides;

/// The friendly launchctl wrapper
#[derive(Parser, Debug)]
#[command(
    name = "lunchy",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Suppress confirmation messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log subprocess calls and resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding service descriptors
    #[arg(long, global = true, env = "LUNCHY_AGENTS_DIR", value_name = "DIR")]
    pub agents_dir: Option<PathBuf>,

    #[arg(long, global = true, env = "LUNCHY_LAUNCHCTL", hide = true)]
    pub launchctl: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load every descriptor matching NAME, or those named in ./.lunchy
    Start { name: Option<String> },

    /// Unload every descriptor matching NAME, or those named in ./.lunchy
    Stop { name: Option<String> },

    /// Unload then load every descriptor matching NAME, or those in ./.lunchy
    Restart { name: Option<String> },

    /// List installed descriptors
    #[command(visible_alias = "ls")]
    List,

    /// Show launchctl status of installed descriptors
    #[command(visible_alias = "ps")]
    Status { filter: Option<String> },

    /// Copy a descriptor file into the agents directory
    #[command(visible_alias = "add")]
    Install { path: Option<PathBuf> },

    /// Print the first descriptor matching NAME
    Show { name: Option<String> },

    /// Open the first descriptor matching NAME in $EDITOR
    Edit { name: Option<String> },

    /// Delete every descriptor matching NAME
    #[command(visible_alias = "rm")]
    Remove { name: Option<String> },

    /// List descriptors under PATH (default: agents dir, `homebrew`: cellar)
    Scan { path: Option<String> },

    /// Print usage
    Help,
}

/// A verb with its arguments validated, ready to dispatch.
///
/// Variants are grouped by argument policy: zero-arg handlers, the
/// profile-or-pattern lifecycle handler, and handlers that require a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    List,
    Status(Option<String>),
    Scan(Option<String>),
    Help,
    Lifecycle {
        action: LifecycleAction,
        fragment: Option<String>,
    },
    Show(String),
    Edit(String),
    Remove(String),
    Install(PathBuf),
}

impl Command {
    /// Check the argument shape and build the handler.
    ///
    /// # Errors
    ///
    /// Returns `NameRequired` / `PathRequired` when a required-argument verb
    /// was given no argument.
    pub fn into_handler(self) -> Result<Handler, LunchyError> {
        let lifecycle = |action, fragment| Handler::Lifecycle { action, fragment };
        Ok(match self {
            Self::List => Handler::List,
            Self::Status { filter } => Handler::Status(filter),
            Self::Scan { path } => Handler::Scan(path),
            Self::Help => Handler::Help,
            Self::Start { name } => lifecycle(LifecycleAction::Start, name),
            Self::Stop { name } => lifecycle(LifecycleAction::Stop, name),
            Self::Restart { name } => lifecycle(LifecycleAction::Restart, name),
            Self::Show { name } => Handler::Show(name.ok_or(LunchyError::NameRequired)?),
            Self::Edit { name } => Handler::Edit(name.ok_or(LunchyError::NameRequired)?),
            Self::Remove { name } => Handler::Remove(name.ok_or(LunchyError::NameRequired)?),
            Self::Install { path } => Handler::Install(path.ok_or(LunchyError::PathRequired)?),
        })
    }
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of the invocation. Per-descriptor
    /// failures inside a batch are reported but not returned.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            agents_dir,
            launchctl,
            command,
        } = self;

        let handler = command.into_handler()?;
        if handler == Handler::Help {
            commands::help::run();
            return Ok(());
        }

        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            config: ConfigOverrides {
                agents_dir,
                control_command: launchctl,
            },
        })?;
        commands::dispatch(&app, handler).await
    }
}
