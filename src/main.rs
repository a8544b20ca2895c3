use std::error::Error;
use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use employee_admin::cli::{Cli, Commands};
use employee_admin::client::{EmployeeApi, EmployeeClient};
use employee_admin::config::{ClientConfig, Config};
use employee_admin::error::Result;
use employee_admin::{commands, output};

const LOG_ENV: &str = "EMPLOYEES_LOG";

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

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("employee_admin=debug,employees=debug,warn")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);
    init_logging(cli.verbose);

    match cli.command {
        // Commands that don't talk to the service
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "employees", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        command => {
            let config = Config::load()?;
            let base_url = config.resolve_base_url(cli.base_url.as_deref());
            let page_size = config.resolve_page_size(cli.page_size)?;
            debug!(%base_url, page_size, "using employee service");

            let api: Arc<dyn EmployeeApi> =
                Arc::new(EmployeeClient::new(ClientConfig::parse(&base_url)?));

            match command {
                Commands::List(args) => {
                    commands::list::list(api, page_size, args).await?;
                }
                Commands::Delete(args) => {
                    commands::list::delete(api, page_size, args).await?;
                }
                Commands::Show { id } => {
                    commands::form::show(api, &id).await?;
                }
                Commands::Add(args) => {
                    commands::form::add(api, args).await?;
                }
                Commands::Edit(args) => {
                    commands::form::edit(api, args).await?;
                }
                Commands::Search(args) => {
                    commands::search::search(api, args).await?;
                }
                Commands::Pages(args) => {
                    commands::search::pages(api, args).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
