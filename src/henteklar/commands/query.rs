use crate::commands::CmdResult;
use crate::error::{HenteklarError, Result};
use crate::model::Child;
use crate::store::RosterStore;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    In,
    Out,
}

impl StatusFilter {
    fn matches(self, child: &Child) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::In => child.is_checked_in(),
            StatusFilter::Out => !child.is_checked_in(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = HenteklarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "in" => Ok(StatusFilter::In),
            "out" => Ok(StatusFilter::Out),
            other => Err(HenteklarError::Validation(format!(
                "Unknown status filter: {} (expected all, in or out)",
                other
            ))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::All => "all",
            StatusFilter::In => "in",
            StatusFilter::Out => "out",
        };
        write!(f, "{}", s)
    }
}

/// Status filter followed by a name search.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    pub status: StatusFilter,
    pub query: Option<String>,
}

impl RosterFilter {
    pub fn apply(&self, children: &[Child]) -> Vec<Child> {
        let by_status = filter_by_status(children, self.status);
        match &self.query {
            Some(query) => search_by_name(&by_status, query),
            None => by_status,
        }
    }
}

/// Aggregates over the whole roster, recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterCounts {
    pub total: usize,
    pub checked_in: usize,
    pub checked_out: usize,
}

impl RosterCounts {
    pub fn from_children(children: &[Child]) -> Self {
        let checked_in = children.iter().filter(|c| c.is_checked_in()).count();
        Self {
            total: children.len(),
            checked_in,
            checked_out: children.len() - checked_in,
        }
    }

    pub fn for_status(&self, status: StatusFilter) -> usize {
        match status {
            StatusFilter::All => self.total,
            StatusFilter::In => self.checked_in,
            StatusFilter::Out => self.checked_out,
        }
    }
}

pub fn filter_by_status(children: &[Child], status: StatusFilter) -> Vec<Child> {
    children
        .iter()
        .filter(|c| status.matches(c))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the child's name.
pub fn search_by_name(children: &[Child], query: &str) -> Vec<Child> {
    if query.is_empty() {
        return children.to_vec();
    }
    let query = query.to_lowercase();
    children
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub fn counts<S: RosterStore>(store: &S) -> Result<RosterCounts> {
    let children = store.list_children()?;
    Ok(RosterCounts::from_children(&children))
}

pub fn run<S: RosterStore>(store: &S, filter: &RosterFilter) -> Result<CmdResult> {
    let children = store.list_children()?;
    let counts = RosterCounts::from_children(&children);
    let listed = filter.apply(&children);
    debug!(
        status = %filter.status,
        query = filter.query.as_deref().unwrap_or(""),
        listed = listed.len(),
        "roster queried"
    );
    Ok(CmdResult::default()
        .with_listed_children(listed)
        .with_counts(counts))
}
