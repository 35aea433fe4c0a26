use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::warn;

use super::helpers::people;

pub fn run<S: DataStore>(store: &mut S, ids: &[u64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let before = people(store)?;
        let removed = store.delete(id)?;
        if removed == 0 {
            warn!(id, "delete requested for unknown id");
            result.add_message(CmdMessage::warning(format!("No person with id {}", id)));
            continue;
        }

        for person in before.into_iter().filter(|p| p.id == id) {
            result.add_message(CmdMessage::success(format!(
                "Person deleted ({}): {}",
                id,
                person.fields.full_name()
            )));
            result.affected_people.push(person);
        }
    }

    result.listed_people = people(store)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_selected_people() {
        let mut fixture = StoreFixture::new().with_people(3);
        let result = run(&mut fixture.store, &[1, 3]).unwrap();

        assert_eq!(result.affected_people.len(), 2);
        let remaining: Vec<_> = result.listed_people.iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![2]);
    }

    #[test]
    fn unknown_id_is_a_warning_not_an_error() {
        let mut fixture = StoreFixture::new().with_people(2);
        let result = run(&mut fixture.store, &[7]).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.messages[0].content, "No person with id 7");
        assert_eq!(result.listed_people.len(), 2);
    }

    #[test]
    fn deleting_everyone_resets_ids() {
        let mut fixture = StoreFixture::new().with_people(1);
        run(&mut fixture.store, &[1]).unwrap();
        assert_eq!(fixture.store.next_id().unwrap(), 1);
    }
}
