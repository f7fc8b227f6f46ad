use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};

use infero::config::{Config, ConflictPolicy};

/// Decides whether a query is entailed, contradicted, or left undetermined by some rules and facts.
#[derive(Parser, Debug)]
#[command(name = "infero", version, about, long_about = None)]
pub struct Cli {
    /// Print help as markdown.
    #[arg(long, hide = true)]
    pub markdown_help: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compiles a .ifo file, giving the derivation of the query.
    Compile {
        /// The .ifo file to compile.
        file: PathBuf,

        /// The maximum number of iterations of a solve.
        #[arg(long)]
        iterations: Option<u32>,

        /// How to handle the derivation of the opposite value of an atom, either 'reject' or 'overwrite'.
        #[arg(long, value_name = "POLICY")]
        conflict_policy: Option<String>,

        /// Overwrite the value of an atom when the opposite value is derived, rather than stopping with an error.
        #[arg(long, conflicts_with = "conflict_policy")]
        overwrite_conflicts: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prints the tokens of a file.
    Tokenize {
        /// The file to read.
        file: PathBuf,
    },

    /// Prints the sentences of each section of a file.
    Ast {
        /// The file to read.
        file: PathBuf,
    },
}

/// Applies the options of a compile to a default configuration.
///
/// Returns a message if some option is out of bounds or unknown.
pub fn config_from_args(
    iterations: Option<u32>,
    conflict_policy: Option<&str>,
    overwrite_conflicts: bool,
) -> Result<Config, String> {
    let mut config = Config::default();

    if let Some(limit) = iterations {
        if !config.iteration_limit.set_bounded(limit) {
            let (min, max) = config.iteration_limit.min_max();
            return Err(format!(
                "{} must be between {min} and {max}",
                config.iteration_limit.name
            ));
        }
    }

    if let Some(policy) = conflict_policy {
        match ConflictPolicy::from_str(policy) {
            Ok(policy) => config.conflict_policy.value = policy,
            Err(()) => {
                let (min, max) = config.conflict_policy.min_max();
                return Err(format!(
                    "{} must be either {min} or {max}, found: {policy}",
                    config.conflict_policy.name
                ));
            }
        }
    }

    if overwrite_conflicts {
        config.conflict_policy.value = ConflictPolicy::Overwrite;
    }

    Ok(config)
}
