mod cli;
mod commands;
mod context;
mod output;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands, LibraryCommands, PostCommands};
use context::AppContext;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = cli.config_dir.as_deref();
    let result = match cli.command {
        Commands::Settings(settings_cmd) => commands::settings::run(config_dir, settings_cmd),
        Commands::Generate(args) => with_context(config_dir, |ctx| commands::generate::run(ctx, args)),
        Commands::Save {
            title,
            content,
            json,
        } => with_context(config_dir, |ctx| commands::save::run(ctx, title, content, json)),
        Commands::Post(PostCommands::Create {
            title,
            content,
            status,
            json,
        }) => with_context(config_dir, |ctx| {
            commands::post::create(ctx, title, content, status, json)
        }),
        Commands::TestConnection { api_key, json } => {
            with_context(config_dir, |ctx| commands::connection::run(ctx, api_key, json))
        }
        Commands::Library(library_cmd) => with_context(config_dir, |ctx| match library_cmd {
            LibraryCommands::List { json } => commands::library::list(ctx, json),
            LibraryCommands::Show { id, json } => commands::library::show(ctx, id, json),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn with_context(
    config_dir: Option<&Path>,
    run: impl FnOnce(&AppContext) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    AppContext::new(config_dir).and_then(|ctx| run(&ctx))
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
