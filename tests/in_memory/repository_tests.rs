//! In-memory integration tests for the generic repository contract.

use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryRepository,
    ports::{AgentRecord, Repository, RepositoryError},
};

#[fixture]
fn repo() -> InMemoryRepository<AgentRecord> {
    InMemoryRepository::new()
}

fn agent(name: &str) -> AgentRecord {
    AgentRecord {
        agent_id: None,
        name: name.to_owned(),
        version: 0,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_the_same_records(
    repo: InMemoryRepository<AgentRecord>,
) -> Result<(), eyre::Report> {
    let shared = repo.clone();
    let created = repo.create(agent("Agent 1")).await?;
    let id = created
        .agent_id
        .clone()
        .ok_or_else(|| eyre::eyre!("created agent has no identifier"))?;

    let fetched = shared.get(&id).await?;

    eyre::ensure!(fetched == Some(created), "clone did not observe the write");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_issue_distinct_identifiers(
    repo: InMemoryRepository<AgentRecord>,
) -> Result<(), eyre::Report> {
    let handles: Vec<_> = (0..16)
        .map(|index| {
            let worker = repo.clone();
            tokio::spawn(async move { worker.create(agent(&format!("Agent {index}"))).await })
        })
        .collect();

    let mut ids = Vec::with_capacity(handles.len());
    for handle in handles {
        let created = handle.await??;
        ids.push(
            created
                .agent_id
                .ok_or_else(|| eyre::eyre!("created agent has no identifier"))?,
        );
    }
    ids.sort_unstable();
    ids.dedup();

    eyre::ensure!(ids.len() == 16, "expected 16 unique ids, got {}", ids.len());
    eyre::ensure!(repo.list().await?.len() == 16, "expected 16 stored agents");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_one_of_two_writers_from_the_same_read_wins(
    repo: InMemoryRepository<AgentRecord>,
) -> Result<(), eyre::Report> {
    let created = repo.create(agent("Original")).await?;
    let first_writer = AgentRecord {
        name: "First".to_owned(),
        ..created.clone()
    };
    let second_writer = AgentRecord {
        name: "Second".to_owned(),
        ..created
    };

    let winner = repo.upsert(first_writer).await?;
    let loser = repo.upsert(second_writer).await;

    eyre::ensure!(winner.version == 2, "winning write should bump the version");
    eyre::ensure!(
        matches!(
            loser,
            Err(RepositoryError::StaleRecord {
                expected: 2,
                found: 1,
                ..
            })
        ),
        "expected a stale record error, got {loser:?}"
    );
    let stored = repo.get("1").await?;
    eyre::ensure!(
        stored.as_ref().map(|record| record.name.as_str()) == Some("First"),
        "stale write must not replace the stored record"
    );
    Ok(())
}
