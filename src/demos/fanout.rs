//! # Fan-out / Join
//!
//! Spawn one task per worker, wait for all of them, report in submission
//! order. Workers share nothing; the only synchronization is the join.
//!
//! ```text
//!          ┌─► alpha (sleep 3×) ─┐
//! spawn ───┼─► beta  (sleep 2×) ─┼──► join_all ──► [alpha, beta, gamma]
//!          └─► gamma (sleep 1×) ─┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, info, warn};

/// A unit of work run on its own tokio task.
#[async_trait]
pub trait Task: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> String;
}

/// Sleeps for a fixed delay, then reports.
pub struct SleepyTask {
    name: String,
    delay: Duration,
}

impl SleepyTask {
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait]
impl Task for SleepyTask {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> String {
        debug!("{} sleeping {}ms", self.name, self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        format!("{} finished after {}ms", self.name, self.delay.as_millis())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub name: String,
    /// `Err` carries the join error text if the task panicked or was cancelled.
    pub output: Result<String, String>,
}

/// One `SleepyTask` per name. Earlier names sleep longer, so they finish
/// last; the join still reports them first.
pub fn staggered_tasks(names: &[String], base_delay: Duration) -> Vec<Arc<dyn Task>> {
    let n = names.len() as u32;
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let delay = base_delay * (n - i as u32);
            Arc::new(SleepyTask::new(name.clone(), delay)) as Arc<dyn Task>
        })
        .collect()
}

/// Run every task concurrently and wait for all of them.
pub async fn fan_out(tasks: Vec<Arc<dyn Task>>) -> Vec<TaskReport> {
    info!("Fanning out {} tasks", tasks.len());
    let (names, handles): (Vec<String>, Vec<_>) = tasks
        .into_iter()
        .map(|task| {
            let name = task.name().to_string();
            let handle = tokio::spawn(async move { task.run().await });
            (name, handle)
        })
        .unzip();

    let results = join_all(handles).await;

    names
        .into_iter()
        .zip(results)
        .map(|(name, result)| {
            let output = result.map_err(|e| {
                warn!("Task {} did not complete: {}", name, e);
                e.to_string()
            });
            TaskReport { name, output }
        })
        .collect()
}
