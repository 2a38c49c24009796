use anyhow::Result;
use clap::Parser;
use claim_review_cli::cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
