use crate::commands::{normalize, CmdMessage, CmdResult, PersonChanges};
use crate::error::{CadastroError, Result};
use crate::model::Person;
use crate::store::DataStore;
use crate::validation::validate;

use super::helpers::{find_person, people};

pub fn run<S: DataStore>(store: &mut S, id: u64, changes: &PersonChanges) -> Result<CmdResult> {
    let current = find_person(store, id)?;

    if changes.is_empty() {
        let mut result = CmdResult::default().with_listed_people(vec![current]);
        result.add_message(CmdMessage::info(format!("Nothing to change for {}", id)));
        return Ok(result);
    }

    let fields = normalize(changes.apply(&current.fields));
    validate(&fields)?;

    if !store.update(id, &fields)? {
        return Err(CadastroError::Api(format!("No person with id {}", id)));
    }

    let updated = Person { id, fields };
    let mut result = CmdResult::default().with_listed_people(people(store)?);
    result.add_message(CmdMessage::success(format!(
        "Person updated ({}): {}",
        id,
        updated.fields.full_name()
    )));
    result.affected_people.push(updated);
    Ok(result)
}
