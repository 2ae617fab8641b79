use skt_core::{SkillStatus, Theme};

/// Parse a skill status from a CLI argument.
pub fn parse_status(raw: &str) -> anyhow::Result<SkillStatus> {
    raw.parse::<SkillStatus>().map_err(|_| {
        let expected = SkillStatus::ALL
            .iter()
            .copied()
            .map(SkillStatus::slug)
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("invalid status '{raw}': expected one of {expected}")
    })
}

pub fn parse_theme(raw: &str) -> anyhow::Result<Theme> {
    raw.parse::<Theme>()
        .map_err(|_| anyhow::anyhow!("invalid theme '{raw}': expected light or dark"))
}
