use bikeshare_dashboard::cli::{run, Cli};
use bikeshare_dashboard::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
