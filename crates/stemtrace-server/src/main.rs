//! Stemtrace — Porter stemming with a rule-by-rule trace, from the command
//! line or over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod routes;
mod state;

use state::AppState;
use stemtrace_core::config::DEFAULT_CONFIG_FILE;
use stemtrace_core::StemtraceConfig;

fn resolve_config_path() -> PathBuf {
    std::env::var("STEMTRACE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "stem" => {
                if args.len() < 3 {
                    eprintln!("Usage: stemtrace stem <word>...");
                    std::process::exit(1);
                }
                cli::print_reports(&args[2..]);
                return Ok(());
            }
            "json" => {
                if args.len() < 3 {
                    eprintln!("Usage: stemtrace json <word>...");
                    std::process::exit(1);
                }
                cli::print_json(&args[2..])?;
                return Ok(());
            }
            "rules" => {
                cli::print_rules();
                return Ok(());
            }
            "serve" => {}
            "--help" | "-h" | "help" => {
                println!("Stemtrace — Porter stemmer with step tracing");
                println!();
                println!("Usage: stemtrace [command]");
                println!();
                println!("Commands:");
                println!("  (none) | serve           Start the HTTP server");
                println!("  stem <word>...           Print the rules applied to each word");
                println!("  json <word>...           Print each result as JSON");
                println!("  rules                    List every rule with an example");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'stemtrace help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config_path = resolve_config_path();
    let config = StemtraceConfig::load(&config_path)?;
    let addr = config.bind_addr();

    let state = Arc::new(AppState::new(config));
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Stemtrace server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
