use clap::Parser;
use whereintheworld::cli::{run, Cli};
use whereintheworld::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
