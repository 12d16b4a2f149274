use anyhow::Result;
use clap::Parser;
use roster_view::cli::{Cli, init_tracing, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(cli)
}
