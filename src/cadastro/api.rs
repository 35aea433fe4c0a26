//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every cadastro operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing id strings typed by a user)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over DataStore
//!
//! `CadastroApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CadastroApi<FileStore>`
//! - Testing: `CadastroApi<InMemoryStore>`

use crate::commands;
use crate::error::{CadastroError, Result};
use crate::model::{parse_id, PersonFields};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for cadastro operations.
pub struct CadastroApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> CadastroApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn list_people(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_people<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn create_person(&mut self, fields: PersonFields) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn edit_person(
        &mut self,
        id: &str,
        changes: &commands::PersonChanges,
    ) -> Result<commands::CmdResult> {
        let id = parse_user_id(id)?;
        commands::edit::run(&mut self.store, id, changes)
    }

    pub fn delete_people<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn next_id(&self) -> Result<commands::CmdResult> {
        commands::next_id::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn data_file(&self) -> PathBuf {
        self.store.location()
    }
}

fn parse_user_id(input: &str) -> Result<u64> {
    parse_id(input).map_err(|_| CadastroError::Api(format!("Not a valid id: {}", input)))
}

/// Parses every id, deduplicating while preserving order.
fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<u64>> {
    let mut ids = Vec::with_capacity(inputs.len());
    for input in inputs {
        let id = parse_user_id(input.as_ref())?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PersonChanges};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> CadastroApi<InMemoryStore> {
        CadastroApi::new(InMemoryStore::new(), PathBuf::from("/nonexistent"))
    }

    #[test]
    fn create_dispatches_and_lists() {
        let mut api = api();
        let result = api.create_person(PersonFields::new("Ana", "Silva")).unwrap();
        assert_eq!(result.affected_people[0].id, 1);
        assert_eq!(api.list_people().unwrap().listed_people.len(), 1);
        assert_eq!(api.next_id().unwrap().next_id, Some(2));
    }

    #[test]
    fn ids_are_parsed_and_deduplicated() {
        assert_eq!(parse_ids(&["3", " 1", "3"]).unwrap(), vec![3, 1]);
    }

    #[test]
    fn bad_id_is_an_api_error() {
        let mut api = api();
        let err = api.delete_people(&["x"]).unwrap_err();
        assert_eq!(err.to_string(), "Api Error: Not a valid id: x");
        assert!(api.edit_person("-1", &PersonChanges::default()).is_err());
    }

    #[test]
    fn delete_and_view_take_strings() {
        let mut api = api();
        api.create_person(PersonFields::new("Ana", "Silva")).unwrap();
        api.create_person(PersonFields::new("Bia", "Souza")).unwrap();

        api.delete_people(&["1"]).unwrap();
        let viewed = api.view_people(&["2"]).unwrap();
        assert_eq!(viewed.listed_people[0].fields.first_name, "Bia");
    }

    #[test]
    fn data_file_comes_from_store() {
        assert_eq!(api().data_file(), PathBuf::from("memory://pessoas.csv"));
    }
}
