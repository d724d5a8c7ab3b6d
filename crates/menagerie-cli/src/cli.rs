use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "menagerie",
    about = "Menagerie — an API-key-gated message and creature API",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the menagerie API server
    Serve(ServeArgs),
    /// Print the OpenAPI document
    Docs(DocsArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// API key required by guarded endpoints
    #[arg(long)]
    pub api_key: Option<String>,

    /// Disable the access gate entirely
    #[arg(long)]
    pub permissive: bool,
}

#[derive(Args)]
pub struct DocsArgs {
    /// Print the document on one line instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["menagerie", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.config.is_none());
            assert!(args.bind.is_none());
            assert!(args.api_key.is_none());
            assert!(!args.permissive);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "menagerie",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--api-key",
            "sesame",
            "--permissive",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
            assert_eq!(args.api_key, Some("sesame".into()));
            assert!(args.permissive);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_config_file() {
        let cli =
            Cli::try_parse_from(["menagerie", "serve", "--config", "server.toml"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("server.toml")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_rejects_bad_bind() {
        assert!(Cli::try_parse_from(["menagerie", "serve", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn parse_docs() {
        let cli = Cli::try_parse_from(["menagerie", "docs"]).unwrap();
        if let Command::Docs(args) = cli.command {
            assert!(!args.compact);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_docs_compact() {
        let cli = Cli::try_parse_from(["menagerie", "docs", "--compact"]).unwrap();
        if let Command::Docs(args) = cli.command {
            assert!(args.compact);
        } else {
            panic!("wrong command");
        }
    }
}
