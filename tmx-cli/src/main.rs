//! tmx-cli - Command line tool for the monthly temperature matrix.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tmx-cli",
    version,
    about = "Year x month temperature matrix toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tmx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("tmx-cli starting");
    tmx_cmd::run(cli.command).await
}
