use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::people;

/// Selected people, in the order asked for. Unknown ids become error messages.
pub fn run<S: DataStore>(store: &S, ids: &[u64]) -> Result<CmdResult> {
    let everyone = people(store)?;
    let mut result = CmdResult::default();

    for id in ids {
        match everyone.iter().find(|p| p.id == *id) {
            Some(person) => result.listed_people.push(person.clone()),
            None => result.add_message(CmdMessage::error(format!("No person with id {}", id))),
        }
    }

    Ok(result)
}
