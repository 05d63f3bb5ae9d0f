//! # Timeout Race
//!
//! Two independent sources each deliver one message after their own delay.
//! A single `select!` listens to each source exactly once, plus a timeout,
//! and takes whichever fires first.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    First(String),
    Second(String),
    TimedOut,
}

impl RaceOutcome {
    pub fn describe(&self) -> String {
        match self {
            RaceOutcome::First(msg) => format!("first source won: {msg}"),
            RaceOutcome::Second(msg) => format!("second source won: {msg}"),
            RaceOutcome::TimedOut => "timed out waiting for both sources".to_string(),
        }
    }
}

/// Spawn a task that sends `label` after `delay`.
fn spawn_source(label: &'static str, delay: Duration) -> oneshot::Receiver<String> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let msg = format!("{label} after {}ms", delay.as_millis());
        if tx.send(msg).is_err() {
            debug!("Source {label} finished after the race was decided");
        }
    });
    rx
}

pub async fn race(first_delay: Duration, second_delay: Duration, timeout: Duration) -> RaceOutcome {
    let first = spawn_source("first", first_delay);
    let second = spawn_source("second", second_delay);

    let outcome = tokio::select! {
        Ok(msg) = first => RaceOutcome::First(msg),
        Ok(msg) = second => RaceOutcome::Second(msg),
        () = tokio::time::sleep(timeout) => RaceOutcome::TimedOut,
    };
    info!("Race finished: {:?}", outcome);
    outcome
}
