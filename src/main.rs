use anyhow::Result;
use clap::Parser;
use tracing::info;

use prompt_improver::{AppConfig, AppState, build_improver, init_tracing, run};

#[derive(Parser)]
#[command(name = "prompt-improver")]
#[command(about = "Score prompts and rewrite them into more effective ones", long_about = None)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Improve a single prompt, print the report as JSON and exit
    #[arg(long)]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    init_tracing(&config.log_level);

    let improver = build_improver(&config);

    // Handle one-shot improvement
    if let Some(prompt) = cli.prompt {
        let report = improver.process(&prompt).await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!("Prompt improver v{} starting", env!("CARGO_PKG_VERSION"));
    run(AppState::new(improver, config)).await
}
