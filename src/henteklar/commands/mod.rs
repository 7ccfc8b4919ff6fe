use crate::config::HenteklarConfig;
use crate::model::{Child, TransitionEvent, User};
use std::path::{Path, PathBuf};

pub mod attendance;
pub mod config;
pub mod contacts;
pub mod profile;
pub mod query;
pub mod session;

use contacts::ContactAction;
use query::RosterCounts;

#[derive(Debug, Clone)]
pub struct HenteklarPaths {
    /// Directory holding the session slot and the config file
    pub data_dir: PathBuf,
}

impl HenteklarPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. Clients decide how to present it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_children: Vec<Child>,
    pub listed_children: Vec<Child>,
    pub counts: Option<RosterCounts>,
    pub event: Option<TransitionEvent>,
    pub user: Option<User>,
    pub contact_actions: Vec<ContactAction>,
    pub config: Option<HenteklarConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_children(mut self, children: Vec<Child>) -> Self {
        self.affected_children = children;
        self
    }

    pub fn with_listed_children(mut self, children: Vec<Child>) -> Self {
        self.listed_children = children;
        self
    }

    pub fn with_counts(mut self, counts: RosterCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_event(mut self, event: TransitionEvent) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_contact_actions(mut self, actions: Vec<ContactAction>) -> Self {
        self.contact_actions = actions;
        self
    }

    pub fn with_config(mut self, config: HenteklarConfig) -> Self {
        self.config = Some(config);
        self
    }
}
