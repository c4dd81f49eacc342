//! Command-line front end: builds an initial state, runs the requested
//! strategies and prints what they report.

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use crossterm::style::Stylize;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::io::{self, Write};

use crate::heuristic::Heuristic;
use crate::puzzle::{Fingerprint, State};
use crate::search::{self, SearchResult, SearchStatus, Strategy};

#[derive(Parser, Debug)]
#[command(name = "eight-puzzle")]
#[command(version, about = "Search for a solution path to the 8 slider puzzle", long_about = None)]
#[command(group(ArgGroup::new("initial").required(true).args(["tiles", "random"])))]
pub struct Cli {
    /// Initial state as nine digits, 0 for the blank (e.g. 123405786)
    #[arg(long)]
    pub tiles: Option<State>,

    /// Generate a random initial state
    #[arg(long)]
    pub random: bool,

    /// Only generate solvable random states
    #[arg(long, requires = "random")]
    pub solvable: bool,

    /// Seed for random generation
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Strategy to run
    #[arg(long, value_enum, default_value_t = StrategyArg::All)]
    pub strategy: StrategyArg,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not list the solution path
    #[arg(long)]
    pub no_path: bool,

    /// Clear the terminal before printing
    #[arg(long)]
    pub clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Bfs,
    Dfs,
    Misplaced,
    Manhattan,
    LinearConflict,
    All,
}

impl StrategyArg {
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            StrategyArg::Bfs => vec![Strategy::BreadthFirst],
            StrategyArg::Dfs => vec![Strategy::DepthFirst],
            StrategyArg::Misplaced => vec![Strategy::AStar(Heuristic::MisplacedTiles)],
            StrategyArg::Manhattan => vec![Strategy::AStar(Heuristic::Manhattan)],
            StrategyArg::LinearConflict => vec![Strategy::AStar(Heuristic::LinearConflict)],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// The manual state if one was given, otherwise a random one.
    pub fn initial_state(&self) -> State {
        if let Some(tiles) = self.tiles {
            return tiles;
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        if self.solvable {
            State::random_solvable(&mut rng)
        } else {
            State::random(&mut rng)
        }
    }
}

/// Everything printed for one invocation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub initial: Fingerprint,
    pub solvable: bool,
    pub results: Vec<SearchResult>,
}

impl Report {
    pub fn run(initial: &State, strategies: &[Strategy]) -> Self {
        let results = strategies
            .iter()
            .map(|&strategy| {
                log::info!("running {} search", strategy);
                search::run(initial, strategy)
            })
            .collect();
        Self {
            initial: initial.fingerprint(),
            solvable: initial.is_solvable(),
            results,
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

pub fn write_report<W: Write>(
    out: &mut W,
    initial: &State,
    report: &Report,
    show_path: bool,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "Initial state: {}", report.initial)?;
    write!(out, "{}", initial)?;
    if !report.solvable {
        writeln!(out, "This state cannot reach the goal.")?;
    }
    for result in &report.results {
        writeln!(out)?;
        write_result(out, result, show_path, color)?;
    }
    Ok(())
}

pub fn write_result<W: Write>(
    out: &mut W,
    result: &SearchResult,
    show_path: bool,
    color: bool,
) -> io::Result<()> {
    let heading = format!("{} search", result.strategy);
    if color {
        writeln!(out, "{}", heading.bold())?;
    } else {
        writeln!(out, "{}", heading)?;
    }

    match result.status {
        SearchStatus::Found => {
            writeln!(out, "Nodes expanded: {}", result.expanded)?;
            writeln!(out, "Depth of solution path: {}", result.depth)?;
            if show_path {
                writeln!(out, "Solution path:")?;
                for key in &result.path {
                    writeln!(out, "{}", key)?;
                }
            }
        }
        SearchStatus::Exhausted => {
            let msg = format!("No solution was found using {} search.", result.strategy);
            if color {
                writeln!(out, "{}", msg.red())?;
            } else {
                writeln!(out, "{}", msg)?;
            }
            writeln!(out, "Depth reached was: {}", result.depth)?;
            writeln!(out, "Nodes expanded: {}", result.expanded)?;
        }
    }
    Ok(())
}
