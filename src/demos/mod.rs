//! # Demos
//!
//! Small standalone examples, each runnable on its own with
//! `mousemaze demo <name>`. They share nothing with the maze or with each
//! other.
//!
//! - [`fanout`]: spawn several tasks and wait for all of them
//! - [`race`]: first of two sources or a timeout, whichever comes first
//! - [`animals`]: one trait, several implementors, dynamic dispatch
//! - [`ownership`]: `&mut` mutation versus mutating a moved copy
//! - [`divide`]: returning an error value instead of a bogus result

pub mod animals;
pub mod divide;
pub mod fanout;
pub mod ownership;
pub mod race;

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use log::info;

use crate::core::config::ResolvedConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Fanout,
    Race,
    Animals,
    Ownership,
    Divide,
}

/// Run one demo, writing its output to `out`.
pub async fn run<W: Write>(demo: Demo, config: &ResolvedConfig, out: &mut W) -> io::Result<()> {
    info!("Running demo {:?}", demo);
    let base = Duration::from_millis(config.base_delay_ms);

    match demo {
        Demo::Fanout => {
            let tasks = fanout::staggered_tasks(&config.workers, base);
            writeln!(out, "Spawning {} workers...", tasks.len())?;
            for report in fanout::fan_out(tasks).await {
                match report.output {
                    Ok(line) => writeln!(out, "  {line}")?,
                    Err(e) => writeln!(out, "  {} failed: {e}", report.name)?,
                }
            }
            writeln!(out, "All workers done.")?;
        }
        Demo::Race => {
            let timeout = Duration::from_millis(config.timeout_ms);
            // Timings come from config, so each line states them instead of
            // predicting a winner.
            let rounds = [(base * 2, base), (timeout + base, timeout + base * 2)];
            for (first, second) in rounds {
                let outcome = race::race(first, second, timeout).await;
                writeln!(
                    out,
                    "first {}ms vs second {}ms, timeout {}ms: {}",
                    first.as_millis(),
                    second.as_millis(),
                    timeout.as_millis(),
                    outcome.describe()
                )?;
            }
        }
        Demo::Animals => {
            for speaker in animals::cast() {
                writeln!(out, "{}", animals::introduce(speaker.as_ref()))?;
            }
        }
        Demo::Ownership => {
            for line in ownership::walkthrough() {
                writeln!(out, "{line}")?;
            }
        }
        Demo::Divide => {
            for (a, b) in [(10.0, 2.0), (1.0, 0.0)] {
                writeln!(out, "{}", divide::report(a, b))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_config;

    async fn output_of(demo: Demo) -> String {
        let mut out = Vec::new();
        run(demo, &test_config(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_fanout_output() {
        let out = output_of(Demo::Fanout).await;
        assert!(out.starts_with("Spawning 3 workers...\n"));
        assert!(out.contains("  alpha finished after 600ms\n"));
        assert!(out.ends_with("All workers done.\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_race_output() {
        let out = output_of(Demo::Race).await;
        assert_eq!(
            out,
            "first 400ms vs second 200ms, timeout 1000ms: second source won: second after 200ms\n\
             first 1200ms vs second 1400ms, timeout 1000ms: timed out waiting for both sources\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_race_output_with_short_timeout() {
        let config = ResolvedConfig {
            timeout_ms: 100,
            ..test_config()
        };
        let mut out = Vec::new();
        run(Demo::Race, &config, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "first 400ms vs second 200ms, timeout 100ms: timed out waiting for both sources\n\
             first 300ms vs second 500ms, timeout 100ms: timed out waiting for both sources\n"
        );
        assert!(!out.contains("won"));
    }

    #[tokio::test]
    async fn test_animals_output() {
        let out = output_of(Demo::Animals).await;
        assert!(out.contains("Cat says Mew mew!"));
        assert_eq!(out.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_divide_output_never_prints_result_after_error() {
        let out = output_of(Demo::Divide).await;
        assert_eq!(out, "10 / 2 = 5\nerror: cannot divide 1 by zero\n");
    }

    #[tokio::test]
    async fn test_ownership_output() {
        let out = output_of(Demo::Ownership).await;
        assert!(out.contains("original is still"));
    }
}
