use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod logging;
pub mod output;
mod rewrite;
mod schema_file;

use cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let args = Args::parse();
    let output = args.command.run(args.format)?;
    println!("{}", output);
    Ok(())
}
