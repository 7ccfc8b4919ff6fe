use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an enrolled child.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(String);

impl ChildId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChildId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Mother,
    Father,
    Guardian,
}

impl Relation {
    /// Translation key for the relation label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Relation::Mother => "relations.mother",
            Relation::Father => "relations.father",
            Relation::Guardian => "relations.guardian",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub relation: Relation,
    pub phone: String,
    pub email: String,
    pub is_primary: bool,
}

impl Contact {
    /// Initials used for the contact's avatar, one letter per name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Attendance state of a child together with the time of its last transition.
///
/// Times are stored already formatted (`HH:MM`). A child that has never been
/// checked in or out carries `CheckedOut { at: None }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Attendance {
    CheckedIn { at: String },
    CheckedOut { at: Option<String> },
}

impl Default for Attendance {
    fn default() -> Self {
        Attendance::CheckedOut { at: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: ChildId,
    pub name: String,
    pub age: u8,
    pub group: String,
    pub avatar: String,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default)]
    pub parents: Vec<Contact>,
}

impl Child {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u8,
        group: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let avatar = name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect();
        Self {
            id: ChildId::new(id),
            name,
            age,
            group: group.into(),
            avatar,
            attendance: Attendance::default(),
            parents: Vec::new(),
        }
    }

    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }

    pub fn with_parents(mut self, parents: Vec<Contact>) -> Self {
        self.parents = parents;
        self
    }

    pub fn is_checked_in(&self) -> bool {
        matches!(self.attendance, Attendance::CheckedIn { .. })
    }

    pub fn checked_in_at(&self) -> Option<&str> {
        match &self.attendance {
            Attendance::CheckedIn { at } => Some(at),
            Attendance::CheckedOut { .. } => None,
        }
    }

    pub fn checked_out_at(&self) -> Option<&str> {
        match &self.attendance {
            Attendance::CheckedOut { at } => at.as_deref(),
            Attendance::CheckedIn { .. } => None,
        }
    }

    pub fn primary_contact(&self) -> Option<&Contact> {
        self.parents.iter().find(|c| c.is_primary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Staff,
    Parent,
}

impl Role {
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::Staff => "settings.staff",
            Role::Parent => "settings.parent",
        }
    }
}

/// Identity of the logged-in actor, as persisted in the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// Describes the attendance change that just happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub child_name: String,
    pub direction: Direction,
    pub timestamp: String,
}
