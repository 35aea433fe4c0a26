use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::people;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let listed = people(store)?;
    let mut result = CmdResult::default().with_listed_people(listed);
    if result.listed_people.is_empty() {
        result.add_message(CmdMessage::info("No people registered yet."));
    }
    Ok(result)
}
