//! Startup bootstrap of the `users` table.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::user;

/// Create the `users` table from the entity definition unless it already exists.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(user::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    tracing::info!("Schema ready: users");
    Ok(())
}
