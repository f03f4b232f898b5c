#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    use userhub_core::domain::{NewUser, User};
    use userhub_core::error::RepoError;
    use userhub_core::ports::UserRepository;

    use crate::database::entity::user;
    use crate::database::PostgresUserRepository;

    fn row(id: i32, email: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id,
            name: "John Doe".to_owned(),
            email: email.to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(1, "john.d@gmail.com")]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result: Option<User> = repo.find_by_email("john.d@gmail.com").await.unwrap();

        let user = result.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "john.d@gmail.com");
        assert_eq!(user.password_hash, "$argon2id$stub");
    }

    #[tokio::test]
    async fn test_find_user_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        assert!(repo.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_returns_generated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(3, "new@gmail.com")]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo
            .insert(NewUser {
                name: "John Doe".into(),
                email: "new@gmail.com".into(),
                password_hash: "$argon2id$stub".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "new@gmail.com");
    }

    #[tokio::test]
    async fn test_query_failure_is_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "relation \"users\" does not exist".into(),
            ))])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let result = repo.find_by_email("john.d@gmail.com").await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }
}
