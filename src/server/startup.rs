use sea_orm::DatabaseConnection;

use crate::server::{config::Config, data::genre::GenreRepository, error::AppError};

/// Genres inserted into an empty store, in insertion order.
pub const SEED_GENRES: [&str; 5] = ["Fighting", "RPG", "Platformer", "Racing", "Sports"];

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Inserts the initial genres when the genre table is empty.
///
/// Safe to run on every startup: once any genre exists the step is skipped, so restarts
/// never duplicate rows.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(())` - Genres seeded or seeding skipped
/// - `Err(AppError::DbErr)` - Failed to count or insert genres
pub async fn seed_genres(db: &DatabaseConnection) -> Result<(), AppError> {
    let genre_repo = GenreRepository::new(db);

    let existing = genre_repo.count().await?;
    if existing > 0 {
        tracing::info!("Skipping genre seeding, {} genres already present", existing);
        return Ok(());
    }

    genre_repo.create_many(&SEED_GENRES).await?;
    tracing::info!("Seeded {} genres", SEED_GENRES.len());

    Ok(())
}

/// Resolves once the process receives Ctrl-C or, on Unix, SIGTERM.
///
/// Used with `axum::serve(..).with_graceful_shutdown` so in-flight requests finish
/// before the server exits.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
