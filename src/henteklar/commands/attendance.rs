use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HenteklarError, Result};
use crate::model::{Attendance, ChildId, Direction, TransitionEvent};
use crate::store::RosterStore;
use chrono::NaiveTime;
use tracing::debug;

/// 24-hour, zero padded hour and minute.
pub const TIME_FORMAT: &str = "%H:%M";

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Flips a child between checked in and checked out, stamping `now`.
///
/// The state and its timestamp change together in a single write. An unknown
/// id leaves the store untouched and returns [`HenteklarError::ChildNotFound`].
pub fn toggle<S: RosterStore>(store: &mut S, id: &ChildId, now: NaiveTime) -> Result<CmdResult> {
    let mut child = store
        .get_child(id)?
        .ok_or_else(|| HenteklarError::ChildNotFound(id.clone()))?;

    let timestamp = format_time(now);
    let (attendance, direction) = if child.is_checked_in() {
        (
            Attendance::CheckedOut {
                at: Some(timestamp.clone()),
            },
            Direction::Out,
        )
    } else {
        (
            Attendance::CheckedIn {
                at: timestamp.clone(),
            },
            Direction::In,
        )
    };
    child.attendance = attendance;
    store.save_child(&child)?;

    debug!(child = %child.id, ?direction, %timestamp, "attendance toggled");

    let event = TransitionEvent {
        child_name: child.name.clone(),
        direction,
        timestamp,
    };
    let verb = match direction {
        Direction::In => "checked in",
        Direction::Out => "checked out",
    };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} {} at {}",
        child.name, verb, event.timestamp
    )));
    Ok(result.with_affected_children(vec![child]).with_event(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Child;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn checks_in_a_checked_out_child() {
        let anna = Child::new("1", "Anna", 4, "Solstrålen");
        let mut store = InMemoryStore::with_children(vec![anna]);

        let result = toggle(&mut store, &ChildId::new("1"), at(14, 5)).unwrap();
        let anna = &result.affected_children[0];
        assert!(anna.is_checked_in());
        assert_eq!(anna.checked_in_at(), Some("14:05"));
        assert_eq!(anna.checked_out_at(), None);

        let stored = store.get_child(&ChildId::new("1")).unwrap().unwrap();
        assert_eq!(&stored, anna);
    }

    #[test]
    fn checks_out_a_checked_in_child() {
        let mut store = StoreFixture::new().with_checked_in("2", "Bjørn", "08:00").store;

        let result = toggle(&mut store, &ChildId::new("2"), at(16, 30)).unwrap();
        let bjorn = &result.affected_children[0];
        assert!(!bjorn.is_checked_in());
        assert_eq!(bjorn.checked_out_at(), Some("16:30"));
        assert_eq!(bjorn.checked_in_at(), None);
    }

    #[test]
    fn emits_transition_event() {
        let mut store = StoreFixture::new().with_checked_out("1", "Anna", "15:00").store;

        let result = toggle(&mut store, &ChildId::new("1"), at(7, 9)).unwrap();
        assert_eq!(
            result.event,
            Some(TransitionEvent {
                child_name: "Anna".into(),
                direction: Direction::In,
                timestamp: "07:09".into(),
            })
        );
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Anna checked in at 07:09");
    }

    #[test]
    fn exactly_one_timestamp_after_every_toggle() {
        let mut store = InMemoryStore::seeded();
        let now = at(12, 0);
        for child in store.list_children().unwrap() {
            let result = toggle(&mut store, &child.id, now).unwrap();
            let toggled = &result.affected_children[0];
            let stamps = [toggled.checked_in_at(), toggled.checked_out_at()];
            let present: Vec<_> = stamps.iter().flatten().collect();
            assert_eq!(present, [&"12:00"]);
        }
    }

    #[test]
    fn repeated_toggles_overwrite_previous_time() {
        let mut store = StoreFixture::new().with_checked_out("1", "Anna", "15:00").store;
        let id = ChildId::new("1");

        toggle(&mut store, &id, at(8, 0)).unwrap();
        toggle(&mut store, &id, at(9, 0)).unwrap();
        let result = toggle(&mut store, &id, at(10, 0)).unwrap();

        let anna = &result.affected_children[0];
        assert_eq!(anna.checked_in_at(), Some("10:00"));
        assert_eq!(anna.checked_out_at(), None);
    }

    #[test]
    fn unknown_child_leaves_store_unchanged() {
        let mut store = StoreFixture::new().with_checked_out("1", "Anna", "15:00").store;
        let before = store.list_children().unwrap();

        let err = toggle(&mut store, &ChildId::new("999"), at(14, 5)).unwrap_err();
        assert!(matches!(err, HenteklarError::ChildNotFound(ref id) if id.as_str() == "999"));
        assert_eq!(store.list_children().unwrap(), before);
    }
}
