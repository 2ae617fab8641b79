//! Display strings shared by every view.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use skt_core::{ActivityEntry, Skill};

pub const NO_ACTIVITY: &str = "No recent study activity";
pub const NO_SKILLS: &str = "No skills found. Add your first skill to get started!";
pub const NO_LOGS: &str = "No study logs yet. Log your first study session!";
pub const NO_SKILL_CHOICES: &str = "No skills available. Add some skills first!";

/// `Mar 5, 2025`
#[must_use]
pub fn format_day(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// `1.5h`, `2h`
#[must_use]
pub fn hours_label(hours: f64) -> String {
    format!("{hours}h")
}

/// Totals on the dashboard use one decimal.
#[must_use]
pub fn total_hours_label(hours: f64) -> String {
    format!("{hours:.1}")
}

/// `1.5h • 2 skills`
#[must_use]
pub fn activity_label(entry: &ActivityEntry) -> String {
    let plural = if entry.skills_count == 1 { "" } else { "s" };
    format!(
        "{} • {} skill{plural}",
        hours_label(entry.hours),
        entry.skills_count
    )
}

/// Distinct non-empty categories in sorted order.
#[must_use]
pub fn categories(skills: &[Skill]) -> Vec<String> {
    skills
        .iter()
        .filter_map(|s| s.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use skt_core::SkillStatus;

    fn skill(id: i64, category: Option<&str>) -> Skill {
        Skill {
            id,
            name: format!("skill {id}"),
            category: category.map(str::to_string),
            status: SkillStatus::ToLearn,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn categories_are_unique_and_sorted() {
        let skills = [
            skill(1, Some("Languages")),
            skill(2, None),
            skill(3, Some("Databases")),
            skill(4, Some("Languages")),
            skill(5, Some("  ")),
        ];
        assert_eq!(categories(&skills), vec!["Databases", "Languages"]);
    }

    #[test]
    fn activity_pluralizes() {
        let one = ActivityEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            hours: 1.5,
            skills_count: 1,
        };
        let two = ActivityEntry {
            skills_count: 2,
            hours: 2.0,
            ..one.clone()
        };
        assert_eq!(activity_label(&one), "1.5h • 1 skill");
        assert_eq!(activity_label(&two), "2h • 2 skills");
    }

    #[test]
    fn day_format() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_day(day), "Mar 5, 2025");
        assert_eq!(total_hours_label(3.26), "3.3");
    }
}
