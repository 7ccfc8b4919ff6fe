use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HenteklarError, Result};
use crate::model::{ChildId, Contact};
use crate::store::RosterStore;
use tracing::debug;

/// Links a client can hand to the platform to call or email a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAction {
    pub contact_id: String,
    pub name: String,
    pub call_uri: String,
    pub email_uri: String,
}

impl From<&Contact> for ContactAction {
    fn from(contact: &Contact) -> Self {
        Self {
            contact_id: contact.id.clone(),
            name: contact.name.clone(),
            call_uri: call_uri(contact),
            email_uri: email_uri(contact),
        }
    }
}

pub fn call_uri(contact: &Contact) -> String {
    let digits: String = contact
        .phone
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("tel:{}", digits)
}

pub fn email_uri(contact: &Contact) -> String {
    format!("mailto:{}", contact.email)
}

pub fn actions<S: RosterStore>(store: &S, child_id: &ChildId) -> Result<CmdResult> {
    let child = store
        .get_child(child_id)?
        .ok_or_else(|| HenteklarError::ChildNotFound(child_id.clone()))?;
    let actions = child.parents.iter().map(ContactAction::from).collect();
    Ok(CmdResult::default().with_contact_actions(actions))
}

/// Makes `contact_id` the child's only primary contact.
pub fn set_primary<S: RosterStore>(
    store: &mut S,
    child_id: &ChildId,
    contact_id: &str,
) -> Result<CmdResult> {
    let mut child = store
        .get_child(child_id)?
        .ok_or_else(|| HenteklarError::ChildNotFound(child_id.clone()))?;

    if !child.parents.iter().any(|c| c.id == contact_id) {
        return Err(HenteklarError::ContactNotFound(contact_id.to_string()));
    }

    for contact in child.parents.iter_mut() {
        contact.is_primary = contact.id == contact_id;
    }
    store.save_child(&child)?;
    debug!(child = %child.id, contact = contact_id, "primary contact changed");

    let mut result = CmdResult::default();
    if let Some(primary) = child.primary_contact() {
        result.add_message(CmdMessage::success(format!(
            "{} is now the primary contact for {}",
            primary.name, child.name
        )));
    }
    Ok(result.with_affected_children(vec![child]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relation;
    use crate::store::memory::fixtures::StoreFixture;

    fn contact(phone: &str) -> Contact {
        Contact {
            id: "p1".into(),
            name: "Kari Hansen".into(),
            relation: Relation::Mother,
            phone: phone.into(),
            email: "kari@epost.no".into(),
            is_primary: true,
        }
    }

    #[test]
    fn call_uri_strips_whitespace() {
        assert_eq!(call_uri(&contact("+47 912 34 567")), "tel:+4791234567");
        assert_eq!(call_uri(&contact("912\t34567")), "tel:91234567");
    }

    #[test]
    fn email_uri_uses_mailto() {
        assert_eq!(email_uri(&contact("1")), "mailto:kari@epost.no");
    }

    #[test]
    fn actions_follow_parent_order() {
        let store = StoreFixture::new()
            .with_parents("1", "Anna", &[("Kari", true), ("Per", false)])
            .store;

        let result = actions(&store, &ChildId::new("1")).unwrap();
        let names: Vec<_> = result.contact_actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Kari", "Per"]);
        assert!(result.contact_actions[0].call_uri.starts_with("tel:+47"));
    }

    #[test]
    fn set_primary_demotes_other_contacts() {
        let mut store = StoreFixture::new()
            .with_parents("1", "Anna", &[("Kari", true), ("Per", false), ("Ola", true)])
            .store;
        let id = ChildId::new("1");

        set_primary(&mut store, &id, "1-p2").unwrap();

        let anna = store.get_child(&id).unwrap().unwrap();
        let primaries: Vec<_> = anna
            .parents
            .iter()
            .filter(|c| c.is_primary)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(primaries, ["Per"]);
    }

    #[test]
    fn set_primary_rejects_unknown_contact() {
        let mut store = StoreFixture::new()
            .with_parents("1", "Anna", &[("Kari", true)])
            .store;
        let id = ChildId::new("1");

        let err = set_primary(&mut store, &id, "nope").unwrap_err();
        assert!(matches!(err, HenteklarError::ContactNotFound(_)));

        let anna = store.get_child(&id).unwrap().unwrap();
        assert!(anna.parents[0].is_primary);
    }

    #[test]
    fn set_primary_on_unknown_child() {
        let mut store = StoreFixture::new().store;
        let err = set_primary(&mut store, &ChildId::new("9"), "p1").unwrap_err();
        assert!(matches!(err, HenteklarError::ChildNotFound(_)));
    }
}
