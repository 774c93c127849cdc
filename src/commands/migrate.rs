//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database_url).await?;

    for line in run(&db, args.action).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Apply `action` and describe the outcome, one line per entry.
pub async fn run(db: &Database, action: MigrateAction) -> AppResult<Vec<String>> {
    let lines = match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            vec!["Migrations applied".to_string()]
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            vec!["Last migration rolled back".to_string()]
        }
        MigrateAction::Status => db
            .migration_status()
            .await?
            .into_iter()
            .map(|(name, applied)| {
                format!("{}: {}", name, if applied { "applied" } else { "pending" })
            })
            .collect(),
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await?;
            vec!["Database recreated".to_string()]
        }
    };

    Ok(lines)
}
