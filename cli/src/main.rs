//! mvmctl - command-line client for MicroVM orchestration services

use clap::Parser;

use mvmctl_cli::cli::Cli;
use mvmctl_cli::output::json;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let is_json = cli.is_json();
    if let Err(e) = cli.run().await {
        match json::format_error(&e.to_string(), json::error_code(&e)) {
            Ok(doc) if is_json => println!("{doc}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
