use crate::commands::CmdResult;
use crate::error::{HenteklarError, Result};
use crate::model::ChildId;
use crate::store::RosterStore;

pub fn run<S: RosterStore>(store: &S, id: &ChildId) -> Result<CmdResult> {
    let child = store
        .get_child(id)?
        .ok_or_else(|| HenteklarError::ChildNotFound(id.clone()))?;
    Ok(CmdResult::default().with_listed_children(vec![child]))
}
