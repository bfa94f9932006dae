//! Then steps for task query BDD scenarios.

use super::world::QueryWorld;
use rstest_bdd_macros::then;
use taskboard::task::services::TaskQueryError;

#[then(r#"only task "{id}" is returned"#)]
fn only_task_is_returned(world: &QueryWorld, id: String) -> Result<(), eyre::Report> {
    let listing_result = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result in scenario world"))?;
    let tasks = listing_result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected listing failure: {err}"))?;

    if tasks.len() != 1 {
        return Err(eyre::eyre!("expected exactly one task, found {}", tasks.len()));
    }
    if tasks.iter().any(|task| task.id().as_str() != id) {
        return Err(eyre::eyre!("listing does not match expected task {id}"));
    }
    Ok(())
}

#[then("the listing is empty")]
fn listing_is_empty(world: &QueryWorld) -> Result<(), eyre::Report> {
    let listing_result = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result in scenario world"))?;
    let tasks = listing_result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected listing failure: {err}"))?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected empty listing, found {} tasks", tasks.len()));
    }
    Ok(())
}

#[then(r#"task "{id}" is returned"#)]
fn task_is_returned(world: &QueryWorld, id: String) -> Result<(), eyre::Report> {
    let lookup_result = world
        .last_lookup
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lookup result in scenario world"))?;
    let task = lookup_result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected lookup failure: {err}"))?;
    if task.id().as_str() != id {
        return Err(eyre::eyre!(
            "expected task {id}, found {}",
            task.id().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the lookup fails with not found for "{id}""#)]
fn lookup_fails_not_found(world: &QueryWorld, id: String) -> Result<(), eyre::Report> {
    let lookup_result = world
        .last_lookup
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lookup result in scenario world"))?;

    match lookup_result {
        Err(TaskQueryError::NotFound(missing)) if missing.as_str() == id => Ok(()),
        Err(err) => Err(eyre::eyre!("expected not-found error, got {err}")),
        Ok(task) => Err(eyre::eyre!(
            "expected not-found error, got task {}",
            task.id().as_str()
        )),
    }
}
