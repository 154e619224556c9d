mod app;
mod cli;
mod color;
mod event;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let mut rng = make_rng(cli_opts.seed);
    if let Some(command) = cli_opts.command {
        return cli::run(command, rng.as_mut());
    }

    let mut app = app::App::new(rng);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}

/// Thread RNG by default, a seeded generator when reproducibility is wanted.
fn make_rng(seed: Option<u64>) -> Box<dyn Rng> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}
