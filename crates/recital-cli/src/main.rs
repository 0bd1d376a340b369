use anyhow::Result;
use clap::Parser;

use recital_cli::{cli::Cli, logging, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logging::init(cli.effective_log_level());

    run::execute(cli).await
}
