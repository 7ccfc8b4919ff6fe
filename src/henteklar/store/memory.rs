use super::{seed, RosterStore};
use crate::error::{HenteklarError, Result};
use crate::model::{Child, ChildId};

/// Roster kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    children: Vec<Child>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the kindergarten's fixture roster.
    pub fn seeded() -> Self {
        Self::with_children(seed::roster())
    }

    pub fn with_children(children: Vec<Child>) -> Self {
        Self { children }
    }
}

impl RosterStore for InMemoryStore {
    fn list_children(&self) -> Result<Vec<Child>> {
        Ok(self.children.clone())
    }

    fn get_child(&self, id: &ChildId) -> Result<Option<Child>> {
        Ok(self.children.iter().find(|c| &c.id == id).cloned())
    }

    fn save_child(&mut self, child: &Child) -> Result<()> {
        let slot = self
            .children
            .iter_mut()
            .find(|c| c.id == child.id)
            .ok_or_else(|| HenteklarError::ChildNotFound(child.id.clone()))?;
        *slot = child.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Attendance, Contact, Relation};

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
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_checked_in(mut self, id: &str, name: &str, at: &str) -> Self {
            let child = Child::new(id, name, 4, "Solstrålen")
                .with_attendance(Attendance::CheckedIn { at: at.into() });
            self.store.children.push(child);
            self
        }

        pub fn with_checked_out(mut self, id: &str, name: &str, at: &str) -> Self {
            let child = Child::new(id, name, 5, "Solstrålen").with_attendance(
                Attendance::CheckedOut {
                    at: Some(at.into()),
                },
            );
            self.store.children.push(child);
            self
        }

        pub fn with_parents(mut self, id: &str, name: &str, parents: &[(&str, bool)]) -> Self {
            let parents = parents
                .iter()
                .enumerate()
                .map(|(i, (parent, primary))| Contact {
                    id: format!("{}-p{}", id, i + 1),
                    name: parent.to_string(),
                    relation: Relation::Guardian,
                    phone: format!("+47 900 00 00{}", i),
                    email: format!("parent{}@example.no", i + 1),
                    is_primary: *primary,
                })
                .collect();
            let child = Child::new(id, name, 3, "Blåklokka").with_parents(parents);
            self.store.children.push(child);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn lists_children_in_insertion_order() {
        let store = StoreFixture::new()
            .with_checked_out("3", "Cecilie", "15:00")
            .with_checked_in("1", "Anna", "08:00")
            .with_checked_in("2", "Bjørn", "08:30")
            .store;

        let names: Vec<_> = store
            .list_children()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Cecilie", "Anna", "Bjørn"]);
    }

    #[test]
    fn missing_child_is_none_not_error() {
        let store = StoreFixture::new().with_checked_in("1", "Anna", "08:00").store;
        assert!(store.get_child(&ChildId::new("999")).unwrap().is_none());
        assert!(store.get_child(&ChildId::new("1")).unwrap().is_some());
    }

    #[test]
    fn save_replaces_existing_record() {
        let mut store = StoreFixture::new().with_checked_in("1", "Anna", "08:00").store;
        let mut anna = store.get_child(&ChildId::new("1")).unwrap().unwrap();
        anna.group = "Blåklokka".into();
        store.save_child(&anna).unwrap();

        let stored = store.get_child(&ChildId::new("1")).unwrap().unwrap();
        assert_eq!(stored.group, "Blåklokka");
        assert_eq!(store.list_children().unwrap().len(), 1);
    }

    #[test]
    fn save_cannot_enroll_new_children() {
        let mut store = InMemoryStore::new();
        let err = store
            .save_child(&Child::new("42", "Nora", 3, "Blåklokka"))
            .unwrap_err();
        assert!(matches!(err, HenteklarError::ChildNotFound(_)));
        assert!(store.list_children().unwrap().is_empty());
    }

    #[test]
    fn seeded_store_has_unique_ids() {
        let store = InMemoryStore::seeded();
        let children = store.list_children().unwrap();
        assert!(!children.is_empty());
        let mut ids: Vec<_> = children.iter().map(|c| c.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), children.len());
    }
}
