use crate::api::{Announcement, ApiError, CreateAnnouncement};
use crate::listing::Filterable;
use chrono::NaiveDateTime;
use leptos::*;

pub const AUDIENCES: [(&str, &str); 3] = [("", "Everyone"), ("Managers", "Managers"), ("HR", "HR")];
const TITLE_LIMIT: usize = 120;

impl Filterable for Announcement {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.title.as_deref(),
            self.message.as_deref(),
            self.created_by.as_deref(),
        ]
    }

    fn type_value(&self) -> Option<&str> {
        self.audience.as_deref()
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        self.created_at.map(|at| at.naive_utc())
    }
}

#[derive(Clone, Copy)]
pub struct AnnouncementFormState {
    title: RwSignal<String>,
    message: RwSignal<String>,
    audience: RwSignal<String>,
}

impl Default for AnnouncementFormState {
    fn default() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            message: create_rw_signal(String::new()),
            audience: create_rw_signal(String::new()),
        }
    }
}

impl AnnouncementFormState {
    pub fn title_signal(&self) -> RwSignal<String> {
        self.title
    }

    pub fn message_signal(&self) -> RwSignal<String> {
        self.message
    }

    pub fn audience_signal(&self) -> RwSignal<String> {
        self.audience
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.message.set(String::new());
        self.audience.set(String::new());
    }

    pub fn to_payload(&self) -> Result<CreateAnnouncement, ApiError> {
        let title = self.title.get_untracked().trim().to_string();
        let message = self.message.get_untracked().trim().to_string();
        if title.is_empty() {
            return Err(ApiError::validation("Title is required."));
        }
        if title.chars().count() > TITLE_LIMIT {
            return Err(ApiError::validation(format!(
                "Title must be at most {} characters.",
                TITLE_LIMIT
            )));
        }
        if message.is_empty() {
            return Err(ApiError::validation("Message is required."));
        }
        let audience = Some(self.audience.get_untracked().trim().to_string()).filter(|a| !a.is_empty());
        Ok(CreateAnnouncement {
            title,
            message,
            audience,
        })
    }
}
