//! Basket Pricer - command-line prompt and HTTP server

use anyhow::Result;
use basket_pricer::{api::{self, AppState}, config, BatchRunner, Checkout, RuleSet};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "basket-pricer", version, about = "Price a basket of item codes")]
struct Cli {
    #[arg(long, global = true, env = "RULES_PATH", help = "JSON rule-set file (defaults to the built-in catalog)")]
    rules: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price ITEMS (one code per character), or prompt for them when omitted
    Price { items: Option<String> },
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let rules = config::load_rules(cli.rules.as_deref())?;
    match cli.command.unwrap_or(Command::Price { items: None }) {
        Command::Price { items } => price(rules, items),
        Command::Serve { host, port } => serve(rules, &host, port).await,
    }
}

fn price(rules: Arc<RuleSet>, items: Option<String>) -> Result<()> {
    let items = match items { Some(items) => items, None => prompt()? };
    let result = BatchRunner::new(Checkout::new(rules)).run_str(&items);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn prompt() -> Result<String> {
    print!("Type all items to be added here: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

async fn serve(rules: Arc<RuleSet>, host: &str, port: u16) -> Result<()> {
    let app = api::router(AppState { rules });
    let addr = format!("{}:{}", host, port);
    tracing::info!("🚀 Basket pricer listening on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(&addr).await?, app).await?;
    Ok(())
}
