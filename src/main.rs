use clap::Parser;

use shorthand::cli::{self, output, Cli};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
