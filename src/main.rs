use clap::Parser as ClapParser;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/commands.rs"]
mod commands;
#[path = "main/shared.rs"]
mod shared;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compile {
            file,
            output,
            verbose,
        } => commands::cmd_compile(file, output.as_deref(), *verbose),
        Commands::Tokens { file, whitespace } => commands::cmd_tokens(file, *whitespace),
        Commands::Parse { file, stmt, expr } => commands::cmd_parse(file, *stmt, *expr),
    }
}
