//! `bojro` command-line front end.
//!
//! ```text
//! bojro run program.bojro
//! bojro ast --json program.bojro
//! echo 'লিখো(1 + 2);' | bojro run
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use bojro_compiler::{
    gallery, RunConfig, SourceFile, DEFAULT_FILE_NAME, DEFAULT_MAX_OUTPUT_LINES,
    DEFAULT_STEP_LIMIT,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Bojro (বজ্র): a small Bengali-keyword teaching language.
#[derive(Parser, Debug)]
#[command(name = "bojro", version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `BOJRO_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and run a program, printing its output lines.
    Run {
        #[command(flatten)]
        input: Input,

        /// Abort after this many evaluation steps.
        #[arg(long, env = "BOJRO_STEP_LIMIT", default_value_t = DEFAULT_STEP_LIMIT)]
        step_limit: u64,

        /// Abort after printing this many lines.
        #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_LINES)]
        max_output_lines: usize,

        /// Print the full run report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the token stream, one token per line.
    Tokens {
        #[command(flatten)]
        input: Input,
    },
    /// Print the syntax tree.
    Ast {
        #[command(flatten)]
        input: Input,

        /// Emit JSON instead of the indented text view.
        #[arg(long)]
        json: bool,
    },
    /// Print the rendered program text.
    Render {
        #[command(flatten)]
        input: Input,
    },
    /// List bundled example programs, or print one by slug.
    Examples { slug: Option<String> },
}

#[derive(Args, Debug)]
struct Input {
    /// Source file; reads standard input when omitted or `-`.
    file: Option<PathBuf>,
}

impl Input {
    fn load(&self) -> Result<SourceFile> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Ok(SourceFile::new(path.display().to_string(), source))
            }
            _ => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .context("reading standard input")?;
                Ok(SourceFile::new(DEFAULT_FILE_NAME, source))
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("BOJRO_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "starting");

    match cli.command {
        Command::Run {
            input,
            step_limit,
            max_output_lines,
            json,
        } => {
            let config = RunConfig {
                step_limit,
                max_output_lines,
            };
            let report = bojro_compiler::run_file(&input.load()?, config);
            if json {
                println!("{}", report.to_json());
            } else {
                for line in &report.output {
                    println!("{line}");
                }
                if let Some(err) = &report.error {
                    eprintln!("{}", err.report());
                }
            }
            Ok(exit_code(report.success))
        }
        Command::Tokens { input } => {
            for token in bojro_compiler::tokenize(&input.load()?.source) {
                println!("{token}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Ast { input, json } => match bojro_compiler::view_ast_file(&input.load()?) {
            Ok(view) if json => {
                println!("{}", view.to_json());
                Ok(ExitCode::SUCCESS)
            }
            Ok(view) => {
                print!("{}", view.to_text());
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("{}", err.report());
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Render { input } => match bojro_compiler::render_file(&input.load()?) {
            Ok(text) => {
                print!("{text}");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("{}", err.report());
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Examples { slug: None } => {
            for example in gallery::EXAMPLES {
                println!("{:<12} {}", example.slug, example.title);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Examples { slug: Some(slug) } => match gallery::find(&slug) {
            Some(example) => {
                println!("{}", example.source);
                Ok(ExitCode::SUCCESS)
            }
            None => bail!(
                "unknown example '{slug}' (available: {})",
                gallery::slugs().collect::<Vec<_>>().join(", ")
            ),
        },
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "bojro",
            "run",
            "main.bojro",
            "--step-limit",
            "50",
            "--max-output-lines",
            "3",
        ])
        .unwrap();
        match cli.command {
            Command::Run {
                input,
                step_limit,
                max_output_lines,
                json,
            } => {
                assert_eq!(input.file, Some(PathBuf::from("main.bojro")));
                assert_eq!(step_limit, 50);
                assert_eq!(max_output_lines, 3);
                assert!(!json);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["bojro", "-vv", "tokens"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_examples_slug_is_optional() {
        let cli = Cli::try_parse_from(["bojro", "examples"]).unwrap();
        assert!(matches!(cli.command, Command::Examples { slug: None }));
    }
}
