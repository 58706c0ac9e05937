//! CLI command definitions for the `nexus` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use nexus_infra::config::DEFAULT_CONFIG_FILE;

/// Chat endpoint with per-user conversation memory.
#[derive(Parser)]
#[command(name = "nexus", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true, env = "NEXUS_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter derived from the verbosity flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn,nexus=info",
            1 => "info,nexus=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat HTTP server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the effective configuration as TOML.
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from(["nexus", "serve", "--port", "9000", "--host", "0.0.0.0"])
            .unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            Commands::Config => panic!("expected serve"),
        }
    }

    #[test]
    fn serve_without_flags_defers_to_config() {
        let cli = Cli::try_parse_from(["nexus", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: None,
                host: None
            }
        ));
    }

    #[test]
    fn verbosity_selects_filter() {
        let quiet = Cli::try_parse_from(["nexus", "--quiet", "config"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");

        let verbose = Cli::try_parse_from(["nexus", "-v", "config"]).unwrap();
        assert_eq!(verbose.log_filter(), "info,nexus=debug");

        let trace = Cli::try_parse_from(["nexus", "config", "-vv"]).unwrap();
        assert_eq!(trace.log_filter(), "trace");
    }
}
