//! Then steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use rstest_bdd_macros::then;
use taskboard::task::domain::TaskStatus;

#[then("the overdue count is {count:usize}")]
fn overdue_count_is(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let overdue = world.store.stats().overdue;
    eyre::ensure!(overdue == count, "expected {count} overdue tasks, found {overdue}");
    Ok(())
}

#[then("the task count is {count:usize}")]
fn task_count_is(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let total = world.store.stats().total;
    eyre::ensure!(total == count, "expected {count} tasks, found {total}");
    Ok(())
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(
    world: &TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.id_for(&title)?;
    let task = world
        .store
        .get(&id)
        .ok_or_else(|| eyre::eyre!("task '{title}' missing from store"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then(r#"the categories are "{categories}""#)]
fn categories_are(world: &TaskBoardWorld, categories: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = categories.split(',').map(|c| c.trim().to_owned()).collect();
    let actual = world.store.categories();
    eyre::ensure!(
        actual == expected,
        "expected categories {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("the last deletion changed nothing")]
fn last_deletion_was_no_op(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let last = world
        .last_delete
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deletion result"))?;
    eyre::ensure!(last.is_none(), "expected a no-op deletion, got {last:?}");
    Ok(())
}

#[then(r#"the search returns "{title}""#)]
fn search_returns(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let results = world
        .last_search
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing search results"))?;
    let titles: Vec<&str> = results.iter().map(|task| task.title()).collect();
    eyre::ensure!(titles == [title.as_str()], "unexpected search results {titles:?}");
    Ok(())
}

#[then("the board is ready")]
fn board_is_ready(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.store.is_ready(), "store was not loaded");
    Ok(())
}
