//! Given steps for task assignment BDD scenarios.

use super::world::{TaskAssignmentWorld, run_async};
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"an existing task titled "{title}" costing {cost:i64}"#)]
fn existing_task(
    world: &mut TaskAssignmentWorld,
    title: String,
    cost: i64,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create_task(CreateTaskRequest::new(title).with_cost(cost)),
    )
    .into_result()
    .map_err(|message| eyre::eyre!("create task for scenario setup: {message}"))?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"a registered agent named "{name}""#)]
fn registered_agent(world: &mut TaskAssignmentWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_agent(&name))
        .into_result()
        .map_err(|message| eyre::eyre!("create agent for scenario setup: {message}"))?;
    world.last_agent = Some(created);
    Ok(())
}
