//! The task-list collaborator.
//!
//! The tasks page renders whatever the configured [`TaskSource`] reports.
//! The default source snapshots the tokio runtime's worker threads; tests
//! substitute a fixed list.

/// One row of the task report.
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub state: &'static str,
    pub priority: u32,
    pub stack_free: u32,
    pub num: u32,
}

/// Supplies the rows of the tasks page.
pub trait TaskSource: Send + Sync {
    fn tasks(&self) -> Vec<TaskInfo>;
}

/// Reports the workers of the current tokio runtime.
#[derive(Debug, Default)]
pub struct RuntimeTasks;

impl TaskSource for RuntimeTasks {
    fn tasks(&self) -> Vec<TaskInfo> {
        let workers = tokio::runtime::Handle::try_current()
            .map(|handle| handle.metrics().num_workers())
            .unwrap_or(0);

        (0..workers)
            .map(|i| TaskInfo {
                name: format!("worker-{}", i),
                state: "R",
                priority: 0,
                stack_free: 0,
                num: i as u32,
            })
            .collect()
    }
}
