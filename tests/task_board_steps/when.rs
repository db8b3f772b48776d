//! When steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{domain::TaskStatus, query::TaskFilters};

#[when(r#"the task "{title}" is marked "{status}""#)]
fn mark_task(world: &mut TaskBoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.id_for(&title)?;
    world
        .store
        .set_status(&id, target)
        .wrap_err("change task status in scenario")?
        .ok_or_else(|| eyre::eyre!("task '{title}' missing from store"))?;
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_for(&title)?;
    let removed = world
        .store
        .delete(&id)
        .wrap_err("delete task in scenario")?;
    world.last_delete = Some(removed);
    Ok(())
}

#[when(r#"searching for "{text}""#)]
fn search_for(world: &mut TaskBoardWorld, text: String) {
    let results = world.store.filtered(&TaskFilters::new().with_search(text));
    world.last_search = Some(results);
}

#[when("the board is reopened")]
fn reopen_board(world: &mut TaskBoardWorld) {
    world.reopen();
}
