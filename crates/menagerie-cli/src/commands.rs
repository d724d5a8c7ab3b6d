use colored::Colorize;

use menagerie_server::{ApiServer, ServerConfig};

use crate::cli::{Cli, Command, DocsArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Docs(args) => cmd_docs(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;

    println!(
        "{} Menagerie API on {}",
        "✓".green().bold(),
        format!("http://{}", config.bind_addr).bold()
    );
    if config.gate.permissive {
        println!("  Gate: {}", "permissive — no key required".yellow());
    } else {
        println!("  Gate: {}", "x-api-key required on message endpoints".cyan());
    }
    println!("  Docs: {}", format!("http://{}/api-docs", config.bind_addr).blue());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ApiServer::new(config).serve())?;
    Ok(())
}

/// File first, then flags on top.
fn resolve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_path(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(api_key) = args.api_key {
        config.gate.api_key = api_key;
    }
    if args.permissive {
        config.gate.permissive = true;
    }
    Ok(config)
}

fn cmd_docs(args: DocsArgs) -> anyhow::Result<()> {
    let document = menagerie_server::docs::openapi_document();
    if args.compact {
        println!("{}", serde_json::to_string(&document)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&document)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve_args() -> ServeArgs {
        ServeArgs {
            config: None,
            bind: None,
            api_key: None,
            permissive: false,
        }
    }

    #[test]
    fn resolve_without_flags_is_default() {
        let config = resolve_config(serve_args()).unwrap();
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert!(!config.gate.permissive);
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve_config(ServeArgs {
            bind: Some("0.0.0.0:9999".parse().unwrap()),
            api_key: Some("flag-key".into()),
            permissive: true,
            ..serve_args()
        })
        .unwrap();
        assert_eq!(config.bind_addr.port(), 9999);
        assert_eq!(config.gate.api_key, "flag-key");
        assert!(config.gate.permissive);
    }

    #[test]
    fn missing_config_file_fails() {
        let result = resolve_config(ServeArgs {
            config: Some("/no/such/file.toml".into()),
            ..serve_args()
        });
        assert!(result.is_err());
    }
}
