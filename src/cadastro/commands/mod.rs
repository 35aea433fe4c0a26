//! # Command Layer
//!
//! This module contains the **controller logic** of cadastro: what happens when
//! a user saves, edits, deletes or lists people. Each command lives in its own
//! submodule as a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate input before anything reaches the store
//! - Call the store and re-read it after every mutation, so the returned
//!   listing always reflects what is on disk
//! - Return structured [`CmdResult`] values with leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, colors or exit codes
//! - **Argument parsing**: That's the CLI layer's job
//! - **User interaction**: No prompts; a validation failure is returned as an
//!   error and nothing is written
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and live next to each command.
//!
//! ## Command Modules
//!
//! - [`init`]: Create the data file
//! - [`list`]: Every person, in file order
//! - [`view`]: Full details of selected people
//! - [`create`]: Validate and save a new person
//! - [`edit`]: Change some fields of an existing person
//! - [`delete`]: Remove people by id
//! - [`next_id`]: The id the next new person will get
//! - [`config`]: Show or change configuration
//! - [`helpers`]: Shared lookups

use crate::config::CadastroConfig;
use crate::model::{Person, PersonFields};
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod list;
pub mod next_id;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// People created, changed or removed by the command.
    pub affected_people: Vec<Person>,
    /// People to display: the full listing after a mutation, or the selection.
    pub listed_people: Vec<Person>,
    pub next_id: Option<u64>,
    pub data_file: Option<PathBuf>,
    pub config: Option<CadastroConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_people(mut self, people: Vec<Person>) -> Self {
        self.listed_people = people;
        self
    }

    pub fn with_next_id(mut self, id: u64) -> Self {
        self.next_id = Some(id);
        self
    }

    pub fn with_config(mut self, config: CadastroConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// A partial edit: `None` leaves the field as it is, `Some("")` clears it.
#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl PersonChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.street.is_none()
            && self.number.is_none()
            && self.neighborhood.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    pub fn apply(&self, fields: &PersonFields) -> PersonFields {
        fn pick(change: &Option<String>, current: &str) -> String {
            change.clone().unwrap_or_else(|| current.to_string())
        }

        PersonFields {
            first_name: pick(&self.first_name, &fields.first_name),
            last_name: pick(&self.last_name, &fields.last_name),
            street: pick(&self.street, &fields.street),
            number: pick(&self.number, &fields.number),
            neighborhood: pick(&self.neighborhood, &fields.neighborhood),
            city: pick(&self.city, &fields.city),
            state: pick(&self.state, &fields.state),
            country: pick(&self.country, &fields.country),
            phone: pick(&self.phone, &fields.phone),
            email: pick(&self.email, &fields.email),
        }
    }
}

/// Trims surrounding whitespace from every field, as form inputs would be.
pub fn normalize(fields: PersonFields) -> PersonFields {
    let values = fields.into_values().map(|v| v.trim().to_string());
    PersonFields::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_only_touch_given_fields() {
        let current = PersonFields {
            city: "Recife".into(),
            phone: "81999990000".into(),
            ..PersonFields::new("Ana", "Silva")
        };
        let changes = PersonChanges {
            city: Some("Olinda".into()),
            phone: Some(String::new()),
            ..PersonChanges::default()
        };

        let next = changes.apply(&current);
        assert_eq!(next.first_name, "Ana");
        assert_eq!(next.city, "Olinda");
        assert_eq!(next.phone, "");
        assert!(!changes.is_empty());
        assert!(PersonChanges::default().is_empty());
    }

    #[test]
    fn normalize_trims_every_field() {
        let fields = PersonFields {
            email: " ana@x.com ".into(),
            ..PersonFields::new("  Ana", "Silva ")
        };
        let normalized = normalize(fields);
        assert_eq!(normalized.first_name, "Ana");
        assert_eq!(normalized.last_name, "Silva");
        assert_eq!(normalized.email, "ana@x.com");
    }

    #[test]
    fn has_errors_checks_levels() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("careful"));
        assert!(!result.has_errors());
        result.add_message(CmdMessage::error("boom"));
        assert!(result.has_errors());
    }
}
