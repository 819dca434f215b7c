use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use gapallet::{
    commands::{
        pallets,
        ping::ping,
        submit::{exit_code, submit, ContactArgs, QuoteArgs},
    },
    notifier::TerminalNotifier,
    submission_client,
};
use gapallet_models::{contact::ContactDraft, quote::QuoteDraft};
use gapallet_utils::gapallet_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
            return Ok(ExitCode::SUCCESS);
        }
        Command::PalletTypes => {
            pallets::list(&mut std::io::stdout().lock())?;
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    init_tracing();

    let config = gapallet_config::load().context("Failed to load config")?;

    let code = match cli.command {
        Command::Contact(args) => {
            let client = submission_client(&config)?;
            let outcome = submit::<ContactDraft>(client, TerminalNotifier, args.fields()).await;
            exit_code(&outcome)
        }
        Command::Quote(args) => {
            let client = submission_client(&config)?;
            let outcome = submit::<QuoteDraft>(client, TerminalNotifier, args.fields()).await;
            exit_code(&outcome)
        }
        Command::Ping => {
            let client = submission_client(&config)?;
            ping(&client, &config.backend.url).await?;
            ExitCode::SUCCESS
        }
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
            ExitCode::SUCCESS
        }
        Command::Completion { .. } | Command::PalletTypes => unreachable!(),
    };

    Ok(code)
}

#[derive(Debug, Parser)]
#[command(version = gapallet_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a message through the contact form
    #[command(aliases(["c"]))]
    Contact(ContactArgs),
    /// Request a quote for pallets
    #[command(aliases(["q"]))]
    Quote(QuoteArgs),
    /// List the pallet types that can be quoted
    #[command(aliases(["pallets", "p"]))]
    PalletTypes,
    /// Check that the backend is reachable
    Ping,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
