use clap::Parser;
use colored::*;
use crash_points::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_report) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {}", "❌ Error:".red().bold(), error);
            process::exit(1);
        }
    }
}
