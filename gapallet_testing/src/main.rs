use std::net::IpAddr;

use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use gapallet_testing::{backend, StatusCode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Backend {
            host,
            port,
            fail_with,
        } => {
            let fail_with = fail_with
                .map(|status| {
                    StatusCode::from_u16(status)
                        .map_err(|_| anyhow!("Invalid status code {status}"))
                })
                .transpose()?;
            backend::start_server(host, port, fail_with)
                .await
                .context("Mock backend failed")?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the mock lead capture backend
    Backend {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8000")]
        port: u16,
        /// Answer every lead submission with this HTTP status instead of
        /// storing it
        #[arg(long)]
        fail_with: Option<u16>,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
