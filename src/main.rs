//! CLI entry point for the word-search puzzle toolkit

use clap::Parser;
use gridseek::io::cli::{App, Cli};

fn main() -> gridseek::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    App::new(cli).run()
}
