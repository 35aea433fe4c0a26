use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_next_id(store.next_id()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::delete;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn follows_highest_id() {
        let mut fixture = StoreFixture::new();
        assert_eq!(run(&fixture.store).unwrap().next_id, Some(1));

        fixture = fixture.with_people(2);
        assert_eq!(run(&fixture.store).unwrap().next_id, Some(3));

        delete::run(&mut fixture.store, &[1]).unwrap();
        assert_eq!(run(&fixture.store).unwrap().next_id, Some(3));
    }
}
