use clap::Subcommand;

/// Study log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// List the latest study sessions.
    List,
    /// Log a study session. Hours, minutes and seconds are summed.
    Add {
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        hours: Option<String>,
        #[arg(long)]
        minutes: Option<String>,
        #[arg(long)]
        seconds: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Skill id; repeat for several skills.
        #[arg(long = "skill", value_name = "ID")]
        skills: Vec<i64>,
    },
    /// Delete a study session.
    Delete { id: i64 },
}
