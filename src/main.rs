mod cli;
mod client;
mod commands;
mod config;
mod error;
mod form;
mod logging;
mod output;
mod page;
mod render;
mod router;
mod types;
mod workflows;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::{ReqwestTransport, UsersClient};
use config::Config;
use error::Result;
use workflows::{App, FailurePolicy};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't talk to the API
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdesk", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        command => {
            let config = Config::load()?;
            let collection = config.collection_url()?;
            let policy = if cli.strict {
                FailurePolicy::Propagate
            } else {
                FailurePolicy::LogAndContinue
            };
            let mut app = App::new(UsersClient::new(ReqwestTransport::new(), collection), policy);

            match command {
                Commands::List => commands::users::list(&mut app).await?,
                Commands::Show { id } => commands::users::show(&app, &id).await?,
                Commands::Add(args) => commands::users::add(&mut app, args).await?,
                Commands::Edit(args) => commands::users::edit(&mut app, args).await?,
                Commands::Delete { id } => commands::users::delete(&mut app, &id).await?,
                Commands::Render => commands::users::render(&mut app).await?,
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
