//! Task aggregate and dependency-graph validation.

use super::{Agent, Project, Status, Tag, TaskDomainError, TaskId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::ptr;
use std::rc::Rc;

/// Shared handle to a task participating in a dependency graph.
///
/// A task references its dependencies through these handles and never owns
/// them. Identity is the handle's allocation, not the task's field values.
pub type SharedTask = Rc<RefCell<Task>>;

/// Unit of work completed by an agent.
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: String,
    cost: u64,
    status: Status,
    tags: Vec<Tag>,
    dependencies: Vec<SharedTask>,
    project: Option<Project>,
    assignee: Option<Agent>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted cost, re-validated on reconstruction.
    pub cost: i64,
    /// Persisted lifecycle status.
    pub status: Status,
    /// Persisted tags.
    pub tags: Vec<Tag>,
}

impl Task {
    /// Creates a new task in the `Todo` status.
    ///
    /// Duplicate tags are collapsed, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCost`] when `cost` is below one.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        cost: i64,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<Self, TaskDomainError> {
        let validated_cost = validate_cost(cost)?;
        Ok(Self {
            id: None,
            title: title.into(),
            description: description.into(),
            cost: validated_cost,
            status: Status::Todo,
            tags: dedup_tags(tags),
            dependencies: Vec::new(),
            project: None,
            assignee: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCost`] when the stored cost is below
    /// one.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        let PersistedTaskData {
            id,
            title,
            description,
            cost,
            status,
            tags,
        } = data;
        let mut task = Self::new(title, description, cost, tags)?;
        task.id = Some(id);
        task.status = status;
        Ok(task)
    }

    /// Wraps the task in a shared handle so other tasks can depend on it.
    #[must_use]
    pub fn into_shared(self) -> SharedTask {
        Rc::new(RefCell::new(self))
    }

    /// Returns the task identifier, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task cost (always at least one).
    #[must_use]
    pub const fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the task tags.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the tasks this task depends on.
    #[must_use]
    pub fn dependencies(&self) -> &[SharedTask] {
        &self.dependencies
    }

    /// Returns whether `task` is one of this task's direct dependencies.
    #[must_use]
    pub fn depends_on(&self, task: &SharedTask) -> bool {
        self.dependencies.iter().any(|dep| Rc::ptr_eq(dep, task))
    }

    /// Returns the associated project, if any.
    #[must_use]
    pub const fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Returns the assigned agent, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Agent> {
        self.assignee.as_ref()
    }

    /// Assigns the task to an agent, replacing any previous assignee.
    pub fn assign(&mut self, agent: Agent) {
        self.assignee = Some(agent);
    }

    /// Associates the task with a project, replacing any previous one.
    pub fn set_project(&mut self, project: Project) {
        self.project = Some(project);
    }

    /// Adds `task` as a dependency, keeping the graph reachable from this
    /// task free of revisited nodes.
    ///
    /// The edge is dropped silently when [`validate_dependencies`] rejects
    /// the resulting graph; check [`Task::depends_on`] to confirm it was
    /// kept. Adding an existing dependency again changes nothing.
    pub fn add_dependency(&mut self, task: &SharedTask) {
        if self.depends_on(task) {
            return;
        }
        self.dependencies.push(Rc::clone(task));
        if !validate_dependencies(self) {
            self.dependencies.pop();
            tracing::debug!(
                title = %self.title,
                dependencies = self.dependencies.len(),
                "rejected dependency that would revisit a task"
            );
        }
    }

    /// Returns whether the task may start: it has an assignee and every
    /// dependency is done.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.assignee.is_some()
            && self
                .dependencies
                .iter()
                .all(|dep| dep.try_borrow().is_ok_and(|d| d.status == Status::Done))
    }

    /// Moves the task to `InProgress` when it can start.
    ///
    /// Returns `false` and leaves the status unchanged otherwise, including
    /// when the task has already left `Todo`.
    pub fn start_task(&mut self) -> bool {
        if !self.status.can_transition_to(Status::InProgress) || !self.can_start() {
            return false;
        }
        self.status = Status::InProgress;
        true
    }

    /// Returns whether the task may be completed.
    #[must_use]
    pub const fn can_complete(&self) -> bool {
        matches!(self.status, Status::InProgress)
    }

    /// Moves the task to `Done` when it is in progress.
    ///
    /// Returns `false` and leaves the status unchanged otherwise.
    pub fn complete_task(&mut self) -> bool {
        if !self.can_complete() {
            return false;
        }
        self.status = Status::Done;
        true
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("status", &self.status)
            .field("cost", &self.cost)
            .field("tags", &self.tags)
            .field("dependencies", &self.dependencies.len())
            .field("project", &self.project)
            .field("assignee", &self.assignee)
            .finish()
    }
}

/// Walks the dependency graph reachable from `task` and reports whether no
/// task is reached twice.
///
/// The traversal is depth-first with an explicit stack and a single `seen`
/// set shared by the whole walk, so it rejects cycles and also any two
/// paths that converge on the same dependency (diamonds). A dependency that
/// is mutably borrowed elsewhere cannot be inspected and fails validation.
#[must_use]
pub fn validate_dependencies(task: &Task) -> bool {
    let mut seen: HashSet<*const Task> = HashSet::from([ptr::from_ref(task)]);
    let mut stack: Vec<SharedTask> = task.dependencies.clone();

    while let Some(current) = stack.pop() {
        if !seen.insert(current.as_ptr().cast_const()) {
            return false;
        }
        let Ok(node) = current.try_borrow() else {
            return false;
        };
        stack.extend(node.dependencies.iter().cloned());
    }
    true
}

const fn validate_cost(cost: i64) -> Result<u64, TaskDomainError> {
    if cost < 1 {
        return Err(TaskDomainError::InvalidCost(cost));
    }
    Ok(cost.unsigned_abs())
}

fn dedup_tags(tags: impl IntoIterator<Item = Tag>) -> Vec<Tag> {
    let mut unique = Vec::new();
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}
