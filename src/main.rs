/*!
 * schedsim - CPU Scheduling Simulator CLI
 *
 * Reads a JSON workload, runs the requested policy (or all of them with
 * `--all`), and prints results, Gantt timeline, and statistics as JSON.
 *
 * Usage: schedsim <workload.json | -> [--all]
 */

use cpu_sched_sim::{
    init_tracing, AlgorithmRun, Dispatcher, SchedulerError, SchedulerResult, SerializableError,
    SimulationConfig, Workload,
};
use miette::{miette, Context, IntoDiagnostic};
use serde::Serialize;
use std::io::Read;
use tracing::info;

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Single(AlgorithmRun),
    All(Vec<AlgorithmRun>),
}

fn main() -> miette::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        return Err(miette!("usage: schedsim <workload.json | -> [--all]"));
    };
    let compare_all = args.iter().any(|a| a == "--all");

    let raw = read_input(path)?;
    match simulate(&raw, compare_all) {
        Ok(output) => {
            let json = serde_json::to_string_pretty(&output).into_diagnostic()?;
            println!("{}", json);
            Ok(())
        }
        Err(err) => {
            let body = SerializableError::from(err.clone());
            let json = serde_json::to_string_pretty(&body).into_diagnostic()?;
            println!("{}", json);
            Err(err.into())
        }
    }
}

fn read_input(path: &str) -> miette::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .into_diagnostic()
            .wrap_err("Failed to read workload from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read workload file {}", path))
    }
}

fn simulate(raw: &str, compare_all: bool) -> SchedulerResult<Output> {
    let workload = Workload::from_json(raw)?;
    let config = workload.config(SimulationConfig::from_env()?);
    let dispatcher = Dispatcher::new(config);
    info!(
        processes = workload.processes.len(),
        quantum = config.quantum_or_default().ticks(),
        "Workload loaded"
    );

    if compare_all {
        return Ok(Output::All(dispatcher.compare(&workload.processes)?));
    }

    let algorithm = workload.algorithm.ok_or_else(|| {
        SchedulerError::Configuration(
            "workload names no algorithm; set \"algorithm\" or pass --all".to_string(),
        )
    })?;
    Ok(Output::Single(
        dispatcher.run_with_statistics(algorithm, &workload.processes)?,
    ))
}
