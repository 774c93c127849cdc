//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Storefront content backend
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Insert the bundled sample products once the database is connected
    #[arg(long = "seed-data")]
    pub seed_data: bool,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested command, `serve` when none was given.
    ///
    /// A top-level `--seed-data` is folded into the serve arguments.
    pub fn command(self) -> Commands {
        match self.command {
            None => Commands::Serve(ServeArgs {
                seed_data: self.seed_data,
                ..ServeArgs::default()
            }),
            Some(Commands::Serve(args)) => Commands::Serve(ServeArgs {
                seed_data: args.seed_data || self.seed_data,
                ..args
            }),
            Some(command) => {
                if self.seed_data {
                    tracing::warn!("--seed-data only applies to serve; ignoring it");
                }
                command
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command; unset values come from the config
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,

    /// Insert the bundled sample products once the database is connected
    #[arg(long = "seed-data")]
    pub seed_data: bool,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}
