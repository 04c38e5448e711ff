use clap::{Parser as ClapParser, Subcommand};

#[derive(ClapParser)]
#[command(name = "rhovas", about = "Translate Rhovas source into Kotlin")]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Subcommand)]
pub(super) enum Commands {
    /// Translate a Rhovas file to Kotlin
    Compile {
        file: String,
        /// Write the generated Kotlin here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
        /// Report each pipeline stage on stderr
        #[arg(long)]
        verbose: bool,
    },
    /// Print the token stream of a file
    Tokens {
        file: String,
        /// Include whitespace tokens
        #[arg(long)]
        whitespace: bool,
    },
    /// Print the syntax tree of a file
    Parse {
        file: String,
        /// Parse the file as a single statement
        #[arg(long, conflicts_with = "expr")]
        stmt: bool,
        /// Parse the file as a single expression
        #[arg(long)]
        expr: bool,
    },
}
