mod app;
mod cli;
mod config;
mod consts;
mod error;
mod git;
mod output;
mod project;
mod state;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = app::run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
