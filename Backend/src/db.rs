// connexion BD

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::models::company;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Crée la table `companies` si elle n'existe pas encore
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(company::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    info!("Table companies ready");

    Ok(())
}

#[cfg(test)]
pub async fn test_connection() -> DatabaseConnection {
    use sea_orm::ConnectOptions;

    // Une seule connexion : la base SQLite en mémoire vit avec elle
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    ensure_schema(&db).await.unwrap();
    db
}

/// Supprime la table : toute requête suivante échoue (chemins 500)
#[cfg(test)]
pub async fn break_store(db: &DatabaseConnection) {
    db.execute_unprepared("DROP TABLE companies").await.unwrap();
}
