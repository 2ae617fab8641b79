use clap::Subcommand;

/// Skill commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SkillCommands {
    /// List skills, optionally filtered.
    List {
        #[arg(long)]
        category: Option<String>,
        /// to-learn, in-progress, learned
        #[arg(long)]
        status: Option<String>,
    },
    /// Add a skill.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        /// to-learn, in-progress, learned (default: to-learn)
        #[arg(long)]
        status: Option<String>,
    },
    /// Edit a skill; omitted fields keep their current value.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a skill.
    Delete { id: i64 },
}
