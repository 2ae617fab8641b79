//! In-memory backend and recording view shared by the flow tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use serde_json::{Value, json};
use skt_api::{ApiRequest, ApiResponse, Method, RequestError, Transport};
use skt_config::UiConfig;
use skt_core::{Skill, Stats, StudyLog, Theme};
use skt_forms::{CharCounter, Choice, Field, FieldState, FormValidator, SubmitState};
use skt_ui::{Coordinator, ModalKind, Section, Toast, ToastKind, View};

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Store {
    skills: Vec<Value>,
    logs: Vec<Value>,
    next_id: i64,
}

/// Routes requests like the REST backend, over an in-memory store.
#[derive(Default)]
pub struct FakeBackend {
    store: Mutex<Store>,
    failures: Mutex<VecDeque<(u16, String)>>,
    delays: Mutex<VecDeque<Duration>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_skill(&self, name: &str, category: Option<&str>, status: &str) -> i64 {
        let mut store = self.store.lock();
        store.next_id += 1;
        let id = store.next_id;
        store.skills.push(json!({
            "id": id, "name": name, "category": category, "status": status,
            "created_at": "2025-01-01T00:00:00", "updated_at": "2025-01-01T00:00:00"
        }));
        id
    }

    pub fn seed_log(&self, date: &str, hours: f64) -> i64 {
        let mut store = self.store.lock();
        store.next_id += 1;
        let id = store.next_id;
        store.logs.push(json!({
            "id": id, "date": date, "hours": hours, "notes": null, "skills": [],
            "created_at": "2025-01-01T00:00:00"
        }));
        id
    }

    /// Answer the next request with an error envelope.
    pub fn fail_next(&self, status: u16, message: &str) {
        self.failures.lock().push_back((status, message.to_string()));
    }

    /// Hold the next requests for these durations, in order.
    pub fn delay_next(&self, delays: &[Duration]) {
        self.delays.lock().extend(delays.iter().copied());
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.seen
            .lock()
            .iter()
            .map(|r| (r.method.clone(), r.path.clone()))
            .collect()
    }

    pub fn count(&self, method: &Method, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|(m, p)| m == method && p.starts_with(prefix))
            .count()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.seen.lock().iter().rev().find_map(|r| r.body.clone())
    }

    pub fn skill_names(&self) -> Vec<String> {
        self.store
            .lock()
            .skills
            .iter()
            .map(|s| s["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn route(&self, request: &ApiRequest) -> (u16, Value) {
        let (path, query) = request
            .path
            .split_once('?')
            .unwrap_or((request.path.as_str(), ""));
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let mut store = self.store.lock();

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["skills"]) => {
                let category = query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("category="))
                    .map(|c| urlencoding_decode(c));
                let skills: Vec<Value> = store
                    .skills
                    .iter()
                    .filter(|s| {
                        category
                            .as_deref()
                            .is_none_or(|c| s["category"].as_str() == Some(c))
                    })
                    .cloned()
                    .collect();
                (200, Value::Array(skills))
            }
            ("POST", ["skills"]) => {
                store.next_id += 1;
                let mut skill = request.body.clone().unwrap_or(Value::Null);
                skill["id"] = json!(store.next_id);
                store.skills.push(skill.clone());
                (201, skill)
            }
            ("PUT", ["skills", id]) => {
                let id: i64 = id.parse().unwrap();
                let body = request.body.clone().unwrap_or(Value::Null);
                match store.skills.iter_mut().find(|s| s["id"] == json!(id)) {
                    Some(skill) => {
                        for key in ["name", "category", "status"] {
                            skill[key] = body[key].clone();
                        }
                        (200, skill.clone())
                    }
                    None => (404, json!({"error": "Skill not found"})),
                }
            }
            ("DELETE", ["skills", id]) => {
                let id: i64 = id.parse().unwrap();
                store.skills.retain(|s| s["id"] != json!(id));
                (200, json!({"message": "Skill deleted successfully"}))
            }
            ("GET", ["logs"]) => (200, Value::Array(store.logs.clone())),
            ("POST", ["logs"]) => {
                store.next_id += 1;
                let body = request.body.clone().unwrap_or(Value::Null);
                let log = json!({
                    "id": store.next_id, "date": body["date"], "hours": body["hours"],
                    "notes": body["notes"], "skills": [], "created_at": "2025-03-15T10:00:00"
                });
                store.logs.push(log.clone());
                (201, log)
            }
            ("DELETE", ["logs", id]) => {
                let id: i64 = id.parse().unwrap();
                store.logs.retain(|l| l["id"] != json!(id));
                (200, json!({"message": "Study log deleted successfully"}))
            }
            ("GET", ["stats"]) => (
                200,
                json!({
                    "daily_streak": 3, "weekly_hours": 4.5, "monthly_hours": 12.0,
                    "skill_counts": {"To Learn": 1, "Learned": 2},
                    "recent_activity": [{"date": "2025-03-14", "hours": 1.5, "skills_count": 2}]
                }),
            ),
            _ => (404, json!({"error": "Not found"})),
        }
    }
}

fn urlencoding_decode(raw: &str) -> String {
    raw.replace("%20", " ")
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        self.seen.lock().push(request.clone());
        let delay = self.delays.lock().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.failures.lock().pop_front();
        let (status, body) = match failure {
            Some((status, message)) => (status, json!({ "error": message })),
            None => self.route(&request),
        };
        Ok(ApiResponse {
            status,
            body: body.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Section(Section),
    Skeleton(Section),
    ClearSkeleton(Section),
    Dashboard { streak: u32 },
    Skills(Vec<String>),
    Categories(Vec<String>, Option<String>),
    Logs(usize),
    Choices(Vec<String>),
    ShowModal(ModalKind, String),
    HideModal(ModalKind),
    Busy(ModalKind, bool),
    Flash(ModalKind),
    Field { id: String, valid: bool },
    Counter(String, String),
    Submit(ModalKind, bool),
    TimeError(Option<String>),
    Toast(ToastKind, String),
    Confirm(String),
    Loading(bool),
    Theme(Theme),
}

pub struct RecordingView {
    events: Mutex<Vec<Event>>,
    answer: Mutex<bool>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            answer: Mutex::new(true),
        })
    }

    pub fn answer_confirm(&self, yes: bool) {
        *self.answer.lock() = yes;
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Toast(kind, message) => Some((kind, message)),
                _ => None,
            })
            .collect()
    }

    pub fn rendered_skills(&self) -> Vec<Vec<String>> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Skills(names) => Some(names),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().push(event);
    }
}

impl View for RecordingView {
    fn render_dashboard(&self, stats: &Stats) {
        self.push(Event::Dashboard {
            streak: stats.daily_streak,
        });
    }

    fn render_skills(&self, skills: &[Skill]) {
        self.push(Event::Skills(skills.iter().map(|s| s.name.clone()).collect()));
    }

    fn render_logs(&self, logs: &[StudyLog]) {
        self.push(Event::Logs(logs.len()));
    }

    fn render_category_filter(&self, categories: &[String], selected: Option<&str>) {
        self.push(Event::Categories(
            categories.to_vec(),
            selected.map(str::to_string),
        ));
    }

    fn render_skill_choices(&self, choices: &[Choice]) {
        self.push(Event::Choices(
            choices.iter().map(|c| c.label.clone()).collect(),
        ));
    }

    fn show_toast(&self, toast: &Toast) {
        self.push(Event::Toast(toast.kind, toast.message.clone()));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.push(Event::Confirm(prompt.to_string()));
        *self.answer.lock()
    }

    fn set_loading(&self, visible: bool) {
        self.push(Event::Loading(visible));
    }

    fn show_section(&self, section: Section) {
        self.push(Event::Section(section));
    }

    fn show_skeleton(&self, section: Section) {
        self.push(Event::Skeleton(section));
    }

    fn clear_skeleton(&self, section: Section) {
        self.push(Event::ClearSkeleton(section));
    }

    fn show_modal(&self, modal: ModalKind, title: &str) {
        self.push(Event::ShowModal(modal, title.to_string()));
    }

    fn hide_modal(&self, modal: ModalKind) {
        self.push(Event::HideModal(modal));
    }

    fn set_form_busy(&self, modal: ModalKind, busy: bool) {
        self.push(Event::Busy(modal, busy));
    }

    fn flash_success(&self, modal: ModalKind) {
        self.push(Event::Flash(modal));
    }

    fn apply_theme(&self, theme: Theme) {
        self.push(Event::Theme(theme));
    }

    fn render_field(
        &self,
        _modal: ModalKind,
        field: &Field,
        state: &FieldState,
        counter: Option<&CharCounter>,
    ) {
        self.push(Event::Field {
            id: field.id.clone(),
            valid: state.valid,
        });
        if let Some(counter) = counter {
            self.push(Event::Counter(field.id.clone(), counter.to_string()));
        }
    }

    fn render_counter(&self, _modal: ModalKind, field_id: &str, counter: &CharCounter) {
        self.push(Event::Counter(field_id.to_string(), counter.to_string()));
    }

    fn render_submit(&self, modal: ModalKind, state: &SubmitState) {
        self.push(Event::Submit(modal, state.enabled));
    }

    fn render_time_error(&self, message: Option<&str>) {
        self.push(Event::TimeError(message.map(str::to_string)));
    }
}

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

pub fn coordinator(backend: &Arc<FakeBackend>, view: &Arc<RecordingView>) -> Coordinator {
    Coordinator::new(backend.clone(), view.clone(), &UiConfig::default())
        .with_validator(FormValidator::with_today(today))
}
