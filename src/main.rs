use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use is_terminal::IsTerminal;
use srcpatch::areas::session::Session;
use srcpatch::artifacts::core::settings::{DEFAULT_CHECKOUT_DIR, DEFAULT_PATCHES_DIR, Settings};
use srcpatch::artifacts::tools::system::SystemRunner;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "srcpatch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Fetch a Chromium checkout and apply local patches to it",
    long_about = "Makes sure a Chromium checkout exists (fetching or pulling it as needed) \
    and applies every .patch file from the patches directory in name order. \
    Patches that are already present are skipped; a patch that cannot be applied \
    resets the checkout and stops the run.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CHECKOUT_DIR,
        help = "The checkout to patch"
    )]
    checkout: PathBuf,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PATCHES_DIR,
        help = "The directory holding .patch files"
    )]
    patches: PathBuf,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Log more (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    #[command(
        name = "sync",
        about = "Fetch or update the checkout",
        long_about = "This command fetches the checkout without history if it is missing, \
        or validates its origin and pulls it if it exists. Inside a gclient workspace it does nothing."
    )]
    Sync,
    #[command(
        name = "apply",
        about = "Apply all patches to the checkout",
        long_about = "This command applies every .patch file in name order. Already applied patches \
        are skipped. On a conflict the checkout is hard-reset and the command exits with status 1."
    )]
    Apply,
    #[command(
        name = "check",
        about = "Show which patches would apply",
        long_about = "This command dry-runs every patch against the checkout without changing it \
        and exits with status 1 if any patch conflicts."
    )]
    Check,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::new(level))
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let pwd = std::env::current_dir()?;
    let settings = Settings::resolve(&pwd, &cli.checkout, &cli.patches);
    let session = Session::new(settings, Box::new(SystemRunner), Box::new(std::io::stdout()));

    match cli.command {
        None => {
            session.sync()?;
            session.apply()?;
        }
        Some(Commands::Sync) => session.sync()?,
        Some(Commands::Apply) => {
            session.apply()?;
        }
        Some(Commands::Check) => {
            if session.check()?.has_conflicts() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "fatal:".red(), err);
            ExitCode::FAILURE
        }
    }
}
