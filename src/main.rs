use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

use eight_puzzle::cli::{self, Cli, Report};

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let mut stdout = io::stdout();
    if args.clear {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    let initial = args.initial_state();
    let report = Report::run(&initial, &args.strategy.strategies());

    let color = stdout.is_terminal();
    let mut out = stdout.lock();
    if args.json {
        cli::write_json(&mut out, &report)?;
    } else {
        cli::write_report(&mut out, &initial, &report, !args.no_path, color)?;
    }
    out.flush()?;

    Ok(())
}
