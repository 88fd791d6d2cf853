//! Migrate command - manages the `people` schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Manual control: nothing is applied on connect
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match &args.action {
        MigrateAction::Up => db.run_migrations().await.map_err(migration_failed)?,
        MigrateAction::Down => db.rollback_migration().await.map_err(migration_failed)?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table and re-applying migrations; person records will be lost");
            db.fresh_migrations().await.map_err(migration_failed)?
        }
        MigrateAction::Status => {}
    }

    let migrations = db.migration_status().await.map_err(migration_failed)?;
    let has_people = db.has_people_table().await.map_err(migration_failed)?;
    println!("{}", render_status(&migrations, has_people));

    tracing::info!(action = ?args.action, "Migration command finished");
    Ok(())
}

fn migration_failed(e: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}

/// One line per migration, then a summary naming the people table state.
fn render_status(migrations: &[(String, bool)], has_people_table: bool) -> String {
    let applied = migrations.iter().filter(|(_, done)| *done).count();

    let mut lines: Vec<String> = migrations
        .iter()
        .map(|(name, done)| format!("[{}] {}", if *done { "x" } else { " " }, name))
        .collect();
    lines.push(format!(
        "{}/{} applied; people table {}",
        applied,
        migrations.len(),
        if has_people_table { "present" } else { "missing" }
    ));
    lines.join("\n")
}
