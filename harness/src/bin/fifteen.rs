//! `fifteen`: read a start and a goal board from stdin and solve with BFS,
//! A*-h1 and A*-h2 in turn.
//!
//! Policy overrides come from `FIFTEEN_MAX_EXPANSIONS` and `FIFTEEN_DEDUP`;
//! logging from `RUST_LOG` (stderr, default `warn`).

use std::io::{self, Write};

use anyhow::Context;
use fifteen_harness::input::read_board_line;
use fifteen_harness::policy::{build_policy, PolicyConfig};
use fifteen_harness::report::SuccessReport;
use fifteen_harness::runner::run_strategy;
use fifteen_search::strategy::Strategy;

const START_PROMPT: &str =
    "Enter the start board as a 1x16 list, separated by spaces (no brackets): ";
const GOAL_PROMPT: &str =
    "Enter the goal board as a 1x16 list, separated by spaces (no brackets): ";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = PolicyConfig::from_env().context("reading policy from the environment")?;
    let policy = build_policy(&config);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    write!(out, "{START_PROMPT}")?;
    out.flush()?;
    let start = read_board_line(&mut input, 1)?;

    write!(out, "{GOAL_PROMPT}")?;
    out.flush()?;
    let goal = read_board_line(&mut input, 2)?;

    writeln!(out)?;
    writeln!(out, "Solving for:")?;
    writeln!(out, "start_board: {start}")?;
    writeln!(out, "goal_board: {goal}")?;
    writeln!(out)?;
    out.flush()?;

    for strategy in Strategy::ALL {
        let run = run_strategy(strategy, start, goal, &policy)?;
        writeln!(out, "{}", SuccessReport(&run.outcome))?;
        out.flush()?;
    }

    Ok(())
}
