//! Kinship CLI - Describe how members of a family tree are related.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::repl;
use kinship_cli::{Cli, Command, Config, Formatter, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("KINSHIP_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "kinship=debug,warn",
            _ => "kinship=trace,debug",
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> kinship_cli::Result<()> {
    // Load or create config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("ignoring unreadable config: {}", e);
            Config::default()
        }),
    };

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);
    let dataset = cli.dataset.as_deref();

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut config, dataset, &formatter)?;
        }
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter)?;
        }
        Some(Command::Resolve(args)) => {
            let session = Session::open(dataset, &config)?;
            commands::execute_resolve(args, &session, &formatter)?;
        }
        Some(Command::Viewer(args)) => {
            let session = Session::open(dataset, &config)?;
            commands::execute_viewer(args, &session, &formatter)?;
        }
        Some(Command::Relatives(args)) => {
            let session = Session::open(dataset, &config)?;
            commands::execute_relatives(args, &session, &formatter)?;
        }
        Some(Command::Lineage(args)) => {
            let session = Session::open(dataset, &config)?;
            commands::execute_lineage(args, &session, &formatter)?;
        }
    }

    Ok(())
}
