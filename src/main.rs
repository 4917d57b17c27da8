mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use filegate::error::{FilegateError, JsonError};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::logging::init(cli.log_file.as_deref()) {
        fail(&e, cli.json);
    }

    let result = match &cli.command {
        Commands::Check { config } => cli::check::run(config, cli.json),

        Commands::Ami { dir } => cli::ami::run(dir, cli.json),

        Commands::Verify {
            username,
            config,
            addr,
        } => cli::verify::run(username, config, addr, cli.json),
    };

    if let Err(e) = result {
        if e.is_fatal_config() {
            tracing::error!(error = %e, "startup aborted: config rejected");
        }
        fail(&e, cli.json);
    }
}

fn fail(e: &FilegateError, json: bool) -> ! {
    if json {
        if let Ok(body) = serde_json::to_string(&JsonError::from_error(e)) {
            eprintln!("{}", body);
        }
    } else {
        eprintln!("Error: {}", e);
    }
    std::process::exit(e.exit_code());
}
