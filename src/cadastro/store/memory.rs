use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PersonFields;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.ensure_initialized().unwrap();
            Self { store }
        }

        /// Adds `count` people named "Person{n} Test", ids 1..=count.
        pub fn with_people(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = PersonFields::new(format!("Person{}", i + 1), "Test");
                self.store.save(&fields).unwrap();
            }
            self
        }

        pub fn with_person(mut self, first_name: &str, last_name: &str) -> Self {
            self.store
                .save(&PersonFields::new(first_name, last_name))
                .unwrap();
            self
        }

        pub fn with_fields(mut self, fields: PersonFields) -> Self {
            self.store.save(&fields).unwrap();
            self
        }
    }
}
