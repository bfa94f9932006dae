//! When steps for task query BDD scenarios.

use super::world::{QueryWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::domain::{Credential, TaskFilter, TaskId, TaskStatus, User, UserId};

fn acting_user(username: &str) -> Result<User, eyre::Report> {
    let id = UserId::new(username).wrap_err("construct acting user identifier")?;
    User::new(id, username, Credential::new("somePassword")).wrap_err("construct acting user")
}

#[when(r#"the user "{username}" lists tasks without a filter"#)]
fn list_without_filter(world: &mut QueryWorld, username: String) -> Result<(), eyre::Report> {
    let user = acting_user(&username)?;
    world.last_listing = Some(run_async(
        world.service.list_tasks(&TaskFilter::new(), &user),
    ));
    Ok(())
}

#[when(r#"the user "{username}" lists tasks with status "{status}" and search "{search}""#)]
fn list_with_filter(
    world: &mut QueryWorld,
    username: String,
    status: String,
    search: String,
) -> Result<(), eyre::Report> {
    let user = acting_user(&username)?;
    let parsed_status = TaskStatus::try_from(status.as_str()).wrap_err("parse filter status")?;
    let filter = TaskFilter::new()
        .with_status(parsed_status)
        .with_search(search);
    world.last_listing = Some(run_async(world.service.list_tasks(&filter, &user)));
    Ok(())
}

#[when(r#"the user "{username}" requests task "{id}""#)]
fn request_task(world: &mut QueryWorld, username: String, id: String) -> Result<(), eyre::Report> {
    let user = acting_user(&username)?;
    let task_id = TaskId::new(id).wrap_err("construct requested task identifier")?;
    world.last_lookup = Some(run_async(world.service.get_task_by_id(&task_id, &user)));
    Ok(())
}
