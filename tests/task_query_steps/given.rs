//! Given steps for task query BDD scenarios.

use super::world::QueryWorld;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskboard::task::domain::{Task, TaskId, TaskStatus, UserId};

#[given(r#"a task "{id}" titled "{title}" with status "{status}" owned by "{owner}""#)]
fn seeded_task(
    world: &mut QueryWorld,
    id: String,
    title: String,
    status: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("construct task identifier")?;
    let owner_id = UserId::new(owner).wrap_err("construct owner identifier")?;
    let parsed_status = TaskStatus::try_from(status.as_str()).wrap_err("parse task status")?;
    let task = Task::new(task_id, title, "", owner_id, &DefaultClock)
        .wrap_err("construct seeded task")?
        .with_status(parsed_status);
    world.store.insert(task).wrap_err("seed task into store")?;
    Ok(())
}
