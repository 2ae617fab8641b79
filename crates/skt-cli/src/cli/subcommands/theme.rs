use clap::Subcommand;

/// Theme preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the stored, system and effective theme.
    Show,
    /// Store an explicit theme.
    Set {
        /// light or dark
        theme: String,
    },
    /// Switch to the opposite of the effective theme.
    Toggle,
    /// Forget the explicit choice and follow the system.
    Clear,
}
