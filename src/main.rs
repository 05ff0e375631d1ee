//
//  kongo
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kongo::cli::{Cli, Commands};
use kongo::{exit_codes, KongError};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging from `KONGO_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_env("KONGO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<KongError>() {
        Some(e) if e.is_not_found() => exit_codes::NOT_FOUND,
        Some(KongError::Cancelled) => exit_codes::CANCELLED,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Node(cmd) => cmd.run(&cli.global).await,
        Commands::Cluster(cmd) => cmd.run(&cli.global).await,
        Commands::Service(cmd) => cmd.run(&cli.global).await,
        Commands::Route(cmd) => cmd.run(&cli.global).await,
        Commands::Certificate(cmd) => cmd.run(&cli.global).await,
        Commands::Customer(cmd) => cmd.run(&cli.global).await,
        Commands::Sni(cmd) => cmd.run(&cli.global).await,
        Commands::Consumer(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", kongo::APP_NAME, kongo::VERSION);
            Ok(())
        }
    }
}
