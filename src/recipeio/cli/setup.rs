use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipeio", bin_name = "recipeio", version)]
#[command(
    about = "A command-line recipe book",
    long_about = "A command-line recipe book.\n\n\
        Run without a command to start an interactive session, or pass a single \
        command line, e.g. `recipeio find meal dinner`."
)]
pub struct Cli {
    /// Directory holding recipes.json and config.json
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// A single command to run instead of starting a session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any was given.
    pub fn command_line(&self) -> Option<String> {
        (!self.command.is_empty()).then(|| self.command.join(" "))
    }
}
