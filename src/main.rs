use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use colored::Colorize;

use pyinit::{create_project, ProjectRequest, ToolLocator};

#[derive(Parser)]
#[command(
    name = "pyinit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a new Python project with a virtualenv and git repository",
    long_about = None
)]
struct Cli {
    /// The name of the project
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    name: String,

    /// The directory in which to create the project (default: current directory)
    target_dir: Option<String>,

    /// The project description, will be added to setup.py in the final project
    #[arg(short, long, default_value = "")]
    description: String,

    /// The project author, will be added to setup.py in the final project
    #[arg(short, long, default_value = "")]
    author: String,

    /// Do not initialize a git repository
    #[arg(short = 'n', long = "no-git")]
    no_git: bool,

    /// Enable verbose output, shows all output of external commands as well
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let locator = ToolLocator::for_host()?;
    let request = ProjectRequest {
        name: cli.name,
        target_dir: cli
            .target_dir
            .map(|dir| PathBuf::from(shellexpand::tilde(&dir).as_ref())),
        description: escape_quotes(&cli.description),
        author: escape_quotes(&cli.author),
        skip_git: cli.no_git,
        verbose: cli.verbose,
    };
    create_project(&request, &locator)
}

/// Escape `"` so the value can sit inside setup.py's double quotes.
fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}
