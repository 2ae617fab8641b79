mod log;
mod skill;
mod theme;

pub use log::LogCommands;
pub use skill::SkillCommands;
pub use theme::ThemeCommands;
