//! CareerSarathi CLI
//!
//! Server binary for the CareerSarathi exam preparation website.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for CareerSarathi.
#[derive(Parser)]
#[command(
    name = "sarathi",
    version,
    about = "Server for the CareerSarathi exam preparation website"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Start the website server
    Serve {
        /// Port to listen on (overrides the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate configuration and probe the content store
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sarathi::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port } => {
            sarathi::cmd::serve::run(&cli.config, port).await?;
        }
        Commands::Check { strict } => {
            sarathi::cmd::check::run(&cli.config, strict).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["sarathi", "serve"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve { port } => assert!(port.is_none()),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_with_port() {
        let args = ["sarathi", "serve", "--port", "8080"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Serve { port } => assert_eq!(port, Some(8080)),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["sarathi", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["sarathi", "-vvv", "serve"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["sarathi", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
