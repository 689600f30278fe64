//! When steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::{
    Outcome,
    task::{ports::TaskRecord, services::CreateTaskRequest},
};

/// Records a task outcome as either the latest task or the latest failure.
fn record_task(world: &mut TaskAssignmentWorld, outcome: Outcome<TaskRecord>) {
    match outcome {
        Outcome::Success(task) => world.last_task = Some(task),
        Outcome::Failure(message) => world.last_failure = Some(message),
    }
}

#[when(r#"a task titled "{title}" costing {cost:i64} is created"#)]
fn create_task(world: &mut TaskAssignmentWorld, title: String, cost: i64) {
    let outcome = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(title).with_cost(cost)),
    );
    record_task(world, outcome);
}

#[when("the task is assigned to the registered agent")]
fn assign_to_registered_agent(world: &mut TaskAssignmentWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let agent_id = world.agent_id()?;
    let outcome = run_async(world.service.assign_task(&task_id, &agent_id));
    record_task(world, outcome);
    Ok(())
}

#[when(r#"the task is assigned to agent "{agent_id}""#)]
fn assign_to_agent(world: &mut TaskAssignmentWorld, agent_id: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let outcome = run_async(world.service.assign_task(&task_id, &agent_id));
    record_task(world, outcome);
    Ok(())
}

#[when("the board is planned")]
fn plan_board(world: &mut TaskAssignmentWorld) {
    match run_async(world.service.plan_tasks()) {
        Outcome::Success(summary) => world.last_summary = Some(summary),
        Outcome::Failure(message) => world.last_failure = Some(message),
    }
}
