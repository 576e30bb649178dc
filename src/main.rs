use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use ecc_app::config::Args;
use ecc_app::render::{NoPlot, TextPlot};
use ecc_app::session::Session;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), args.tolerance());
    if let Some((a, b)) = args.preset() {
        session = session.with_preset(a, b);
    }

    let outcome = if args.no_plot {
        session.run(&mut NoPlot)
    } else {
        session.run(&mut TextPlot::new(io::stdout(), args.range))
    };
    outcome.context("ECC session aborted")
}
