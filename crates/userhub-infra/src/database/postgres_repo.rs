//! PostgreSQL user repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    Set, SqlErr,
};

use userhub_core::domain::{NewUser, User};
use userhub_core::error::RepoError;
use userhub_core::ports::UserRepository;

use super::entity::user::{self, Entity as UserEntity};
use super::mask_email;

/// PostgreSQL user repository backed by SeaORM.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    classify(err.sql_err(), err)
}

fn classify(sql_err: Option<SqlErr>, err: DbErr) -> RepoError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::Constraint(detail),
        _ => match err {
            DbErr::Conn(e) => RepoError::Connection(e.to_string()),
            DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
            other => RepoError::Query(other.to_string()),
        },
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, RepoError> {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: NotSet,
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let model = user::ActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at.into()),
            updated_at: Set(Utc::now().into()),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(model.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_unique_violation_is_constraint() {
        let err = classify(
            Some(SqlErr::UniqueConstraintViolation("users_email_key".into())),
            DbErr::Custom("duplicate key value".into()),
        );
        assert!(matches!(err, RepoError::Constraint(detail) if detail == "users_email_key"));
    }

    #[test]
    fn test_other_errors() {
        let err = classify(None, DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(err, RepoError::Connection(_)));

        let err = classify(None, DbErr::Custom("syntax error".into()));
        assert!(matches!(err, RepoError::Query(_)));
    }
}
