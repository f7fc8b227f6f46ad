#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::{Path, PathBuf};

use clap::Parser;

use infero::{
    builder::{lexer::tokenize, parser::parse},
    config::Config,
    context::Context,
    reports::{json::SolveJson, Report},
};

mod args;
mod render;

use args::{config_from_args, Cli, Command};

/// The extension required of a file to compile.
const EXTENSION: &str = "ifo";

/// Exit codes, following the convention of SAT solvers.
mod exit {
    pub const ENTAILED: i32 = 10;
    pub const CONTRADICTED: i32 = 20;
    pub const UNDETERMINED: i32 = 30;
    pub const INPUT: i32 = 1;
}

fn main() {
    #[cfg(feature = "log")]
    init_logger();

    let cli = Cli::parse();

    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return;
    }

    match cli.command {
        None => render::usage(),

        Some(Command::Tokenize { file }) => {
            let source = read(&file);
            match tokenize(&source) {
                Ok(lexemes) => {
                    for lexeme in lexemes {
                        println!("{lexeme}");
                    }
                }
                Err(e) => fail(&e),
            }
        }

        Some(Command::Ast { file }) => {
            let source = read(&file);
            match parse(&source) {
                Ok(program) => render::program(&program),
                Err(e) => fail(&e),
            }
        }

        Some(Command::Compile {
            file,
            iterations,
            conflict_policy,
            overwrite_conflicts,
            json,
        }) => {
            let config = match config_from_args(
                iterations,
                conflict_policy.as_deref(),
                overwrite_conflicts,
            ) {
                Ok(config) => config,
                Err(message) => fail(&message),
            };

            let report = compile(file, config, json);
            let code = match report {
                Report::Entailed => exit::ENTAILED,
                Report::Contradicted => exit::CONTRADICTED,
                Report::Undetermined => exit::UNDETERMINED,
            };
            std::process::exit(code);
        }
    }
}

fn compile(file: PathBuf, config: Config, json: bool) -> Report {
    if !matches!(file.extension(), Some(extension) if extension == EXTENSION) {
        fail(&"unknown file extension, a .ifo file is required");
    }

    let source = read(&file);

    let program = match parse(&source) {
        Ok(program) => program,
        Err(e) => fail(&e),
    };

    let mut the_context = match Context::from_program(program, config) {
        Ok(context) => context,
        Err(e) => fail(&e),
    };

    let report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if json {
        match serde_json::to_string_pretty(&SolveJson::from_context(&the_context)) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&e),
        }
    } else {
        render::solution(&the_context);
    }

    report
}

fn read(file: &Path) -> String {
    match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => fail(&format!("unable to read {}: {e}", file.display())),
    }
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(exit::INPUT);
}

#[cfg(feature = "log")]
fn init_logger() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Debug));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to initialise logging: {e}");
            }
        }
        Err(e) => eprintln!("Failed to configure logging: {e}"),
    }
}
