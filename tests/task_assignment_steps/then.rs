//! Then steps for task assignment BDD scenarios.

use super::world::TaskAssignmentWorld;
use rstest_bdd_macros::then;

#[then("the task assignee is the registered agent")]
fn assignee_is_registered_agent(world: &TaskAssignmentWorld) -> Result<(), eyre::Report> {
    if let Some(message) = &world.last_failure {
        return Err(eyre::eyre!("use case failed unexpectedly: {message}"));
    }
    let agent_id = world.agent_id()?;
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task"))?;

    if task.assignee.as_deref() != Some(agent_id.as_str()) {
        return Err(eyre::eyre!(
            "expected assignee {agent_id}, found {:?}",
            task.assignee
        ));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskAssignmentWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task"))?;

    if task.status != status {
        return Err(eyre::eyre!("expected status {status}, found {}", task.status));
    }
    Ok(())
}

#[then(r#"the use case fails with "{message}""#)]
fn use_case_fails_with(world: &TaskAssignmentWorld, message: String) -> Result<(), eyre::Report> {
    let failure = world
        .last_failure
        .as_deref()
        .ok_or_else(|| eyre::eyre!("expected a failure, but the use case succeeded"))?;

    if failure != message {
        return Err(eyre::eyre!("expected failure {message:?}, got {failure:?}"));
    }
    Ok(())
}

#[then("the makespan is between {min:u64} and {max:u64}")]
fn makespan_is_between(
    world: &TaskAssignmentWorld,
    min: u64,
    max: u64,
) -> Result<(), eyre::Report> {
    let summary = world
        .last_summary
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board summary"))?;

    if (summary.min_makespan, summary.max_makespan) != (min, max) {
        return Err(eyre::eyre!(
            "expected makespan ({min}, {max}), found ({}, {})",
            summary.min_makespan,
            summary.max_makespan
        ));
    }
    Ok(())
}
