use clap::Subcommand;

use crate::cli::subcommands::{LogCommands, SkillCommands, ThemeCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Streak, weekly and monthly hours, status counts, recent activity.
    Dashboard,
    /// Skills.
    Skill {
        #[command(subcommand)]
        action: SkillCommands,
    },
    /// Study sessions.
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Light/dark preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}
