use crate::error::{CadastroError, Result};
use crate::model::Person;
use crate::store::DataStore;

/// Every stored person, in file order.
pub fn people<S: DataStore>(store: &S) -> Result<Vec<Person>> {
    store.read_all()?.iter().map(Person::try_from).collect()
}

pub fn find_person<S: DataStore>(store: &S, id: u64) -> Result<Person> {
    store
        .find(id)?
        .as_ref()
        .map(Person::try_from)
        .transpose()?
        .ok_or_else(|| CadastroError::Api(format!("No person with id {}", id)))
}
