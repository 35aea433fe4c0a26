use crate::commands::{normalize, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Person, PersonFields};
use crate::store::DataStore;
use crate::validation::validate;

use super::helpers::people;

pub fn run<S: DataStore>(store: &mut S, fields: PersonFields) -> Result<CmdResult> {
    let fields = normalize(fields);
    validate(&fields)?;

    store.ensure_initialized()?;
    let id = store.save(&fields)?;
    let person = Person { id, fields };

    let mut result = CmdResult::default().with_listed_people(people(store)?);
    result.add_message(CmdMessage::success(format!(
        "Person saved ({}): {}",
        id,
        person.fields.full_name()
    )));
    result.affected_people.push(person);
    Ok(result)
}
