// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Runs timed work on a few threads and prints the timing report.
//!
//! Usage: `my-utils-demo [logger-config.json]`

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use my_utils_logger::{Logger, LoggerConfig, Targets};
use my_utils_outcome::Outcome;
use my_utils_profiler::{SampleRegistry, ScopedTimer, timed_scope};

const WORKERS: u64 = 4;

fn parse_batch(registry: &Arc<SampleRegistry>, inputs: &[&str]) -> Outcome<Vec<u64>, String> {
    let _timer = ScopedTimer::new("parse_batch", registry);
    let mut parsed = Vec::with_capacity(inputs.len());
    for input in inputs {
        match input.parse() {
            Ok(value) => parsed.push(value),
            Err(e) => return Outcome::failure_with_data(format!("{input:?}: {e}"), parsed),
        }
    }
    Outcome::success(parsed)
}

fn simulate_work(id: u64) {
    timed_scope!(format!("worker_{id}"));
    thread::sleep(Duration::from_millis(5 * (id + 1)));
    {
        timed_scope!("shared_step");
        thread::sleep(Duration::from_millis(2));
    }
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => LoggerConfig::from_file(&path)
            .with_context(|| format!("loading logger config from {path}"))?,
        None => LoggerConfig::default().with_targets(Targets::STDERR),
    };
    let logger = Logger::new(config);
    logger.install().context("installing logger")?;

    let registry = my_utils_profiler::init();
    logger.info("profiling demo started");

    let handles: Vec<_> = (0..WORKERS)
        .map(|id| thread::spawn(move || simulate_work(id)))
        .collect();
    for (id, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() {
            tracing::error!(worker = id, "Worker thread panicked");
        }
    }

    match parse_batch(&registry, &["12", "7", "x9", "3"]) {
        Outcome::Success(values) => logger.info(&format!("parsed {values:?}")),
        Outcome::Failure { error, data } => logger.warning(&format!(
            "parse stopped at {error}, kept {} value(s)",
            data.map_or(0, |d| d.len())
        )),
    }

    println!("{}", registry.format(false));

    my_utils_profiler::shutdown();
    logger.notice("profiling demo finished");
    Ok(())
}
