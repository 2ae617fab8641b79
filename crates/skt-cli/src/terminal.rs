//! Terminal rendering of coordinator output.
//!
//! Data goes to stdout in the selected format; toasts, prompts, field
//! errors and the spinner go to stderr.

use std::io::{BufRead, IsTerminal, Write};

use parking_lot::Mutex;
use serde::Serialize;
use skt_core::{Skill, SkillStatus, Stats, StudyLog, Theme};
use skt_forms::{CharCounter, Field, FieldState};
use skt_ui::{ModalKind, Section, Toast, ToastKind, View, present};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;
use crate::progress::Progress;

pub struct TerminalView {
    format: OutputFormat,
    quiet: bool,
    assume_yes: bool,
    spinner: Mutex<Option<Progress>>,
    theme: Mutex<Option<Theme>>,
}

impl TerminalView {
    #[must_use]
    pub fn new(flags: &GlobalFlags) -> Self {
        Self {
            format: flags.format,
            quiet: flags.quiet,
            assume_yes: flags.yes,
            spinner: Mutex::new(None),
            theme: Mutex::new(None),
        }
    }

    /// Last theme applied through the view.
    #[must_use]
    pub fn applied_theme(&self) -> Option<Theme> {
        *self.theme.lock()
    }

    fn print<T: Serialize>(&self, value: &T, table: impl FnOnce() -> String) {
        let rendered = match self.format {
            OutputFormat::Table => Ok(table()),
            format => output::render(value, format),
        };
        match rendered {
            Ok(text) => println!("{text}"),
            Err(error) => tracing::error!(%error, "failed to render output"),
        }
    }

    fn note(&self, message: &str) {
        if !self.quiet {
            Progress::eprintln(message);
        }
    }
}

// ── Table rows ─────────────────────────────────────────────────────

pub const SKILL_HEADERS: [&str; 4] = ["id", "name", "category", "status"];
pub const LOG_HEADERS: [&str; 5] = ["id", "date", "hours", "skills", "notes"];

#[must_use]
pub fn skill_rows(skills: &[Skill]) -> Vec<Vec<String>> {
    skills
        .iter()
        .map(|skill| {
            vec![
                skill.id.to_string(),
                skill.name.clone(),
                skill.category.clone().unwrap_or_else(|| "-".to_string()),
                skill.status.as_str().to_string(),
            ]
        })
        .collect()
}

#[must_use]
pub fn log_rows(logs: &[StudyLog]) -> Vec<Vec<String>> {
    logs.iter()
        .map(|log| {
            let skills = log
                .skills
                .iter()
                .map(|skill| skill.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                log.id.to_string(),
                present::format_day(log.date),
                present::hours_label(log.hours),
                if skills.is_empty() { "-".to_string() } else { skills },
                log.notes
                    .as_deref()
                    .filter(|notes| !notes.trim().is_empty())
                    .unwrap_or("-")
                    .to_string(),
            ]
        })
        .collect()
}

#[must_use]
pub fn dashboard_rows(stats: &Stats) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec!["daily streak".to_string(), format!("{} days", stats.daily_streak)],
        vec![
            "this week".to_string(),
            format!("{}h", present::total_hours_label(stats.weekly_hours)),
        ],
        vec![
            "this month".to_string(),
            format!("{}h", present::total_hours_label(stats.monthly_hours)),
        ],
    ];
    rows.extend(SkillStatus::ALL.iter().map(|status| {
        vec![
            status.as_str().to_ascii_lowercase(),
            stats.count_for(*status).to_string(),
        ]
    }));
    rows
}

#[must_use]
pub fn activity_rows(stats: &Stats) -> Vec<Vec<String>> {
    stats
        .recent_activity
        .iter()
        .map(|entry| vec![present::format_day(entry.date), present::activity_label(entry)])
        .collect()
}

fn dashboard_table(stats: &Stats) -> String {
    let summary = output::rows_table(&["metric", "value"], &dashboard_rows(stats));
    let activity = activity_rows(stats);
    let recent = if activity.is_empty() {
        present::NO_ACTIVITY.to_string()
    } else {
        output::rows_table(&["date", "activity"], &activity)
    };
    format!("{summary}\n\n{recent}")
}

// ── View ───────────────────────────────────────────────────────────

impl View for TerminalView {
    fn render_dashboard(&self, stats: &Stats) {
        self.print(stats, || dashboard_table(stats));
    }

    fn render_skills(&self, skills: &[Skill]) {
        self.print(&skills, || {
            if skills.is_empty() {
                present::NO_SKILLS.to_string()
            } else {
                output::rows_table(&SKILL_HEADERS, &skill_rows(skills))
            }
        });
    }

    fn render_logs(&self, logs: &[StudyLog]) {
        self.print(&logs, || {
            if logs.is_empty() {
                present::NO_LOGS.to_string()
            } else {
                output::rows_table(&LOG_HEADERS, &log_rows(logs))
            }
        });
    }

    fn render_category_filter(&self, categories: &[String], selected: Option<&str>) {
        tracing::debug!(?categories, ?selected, "category filter options");
    }

    fn show_toast(&self, toast: &Toast) {
        let line = format!("{}: {}", toast.kind.as_str(), toast.message);
        match toast.kind {
            ToastKind::Error => Progress::eprintln(&line),
            ToastKind::Info | ToastKind::Success => self.note(&line),
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            self.note(&format!("{prompt} (pass --yes to confirm non-interactively)"));
            return false;
        }

        let mut answer = String::new();
        let read = {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "{prompt} [y/N] ");
            let _ = stderr.flush();
            stdin.lock().read_line(&mut answer)
        };
        match read {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(error) => {
                tracing::warn!(%error, "could not read confirmation");
                false
            }
        }
    }

    fn set_loading(&self, visible: bool) {
        let mut spinner = self.spinner.lock();
        if visible {
            if spinner.is_none() {
                *spinner = Some(Progress::spinner("Loading..."));
            }
        } else if let Some(progress) = spinner.take() {
            progress.finish_clear();
        }
    }

    fn show_section(&self, section: Section) {
        tracing::debug!(section = section.as_str(), "section visible");
    }

    fn show_modal(&self, modal: ModalKind, title: &str) {
        tracing::debug!(?modal, title, "form opened");
    }

    fn apply_theme(&self, theme: Theme) {
        *self.theme.lock() = Some(theme);
    }

    fn render_field(
        &self,
        _modal: ModalKind,
        field: &Field,
        state: &FieldState,
        _counter: Option<&CharCounter>,
    ) {
        if let (false, Some(error)) = (state.valid, state.error.as_deref()) {
            Progress::eprintln(&format!("  {}: {error}", field.plain_label()));
        }
    }

    fn render_time_error(&self, message: Option<&str>) {
        if let Some(message) = message {
            Progress::eprintln(&format!("  Study time: {message}"));
        }
    }
}
