#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use quill_core::RepoError;
    use quill_core::domain::{NewPost, Post, PostChanges};
    use quill_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
    use uuid::Uuid;

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn model(title: &str, age_minutes: i64) -> post::Model {
        let at = Utc::now() - Duration::minutes(age_minutes);
        post::Model {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            content: "Content".to_owned(),
            author: "Anonymous".to_owned(),
            created_at: at.into(),
            updated_at: at.into(),
        }
    }

    #[tokio::test]
    async fn test_create_post() {
        let input = NewPost::new(Some("Test Post".into()), Some("Content".into()), None).unwrap();
        let draft = Post::new(input);

        let stored = post::Model {
            id: draft.id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
            created_at: draft.created_at.into(),
            updated_at: draft.updated_at.into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let created = repo.create(draft.clone()).await.unwrap();

        assert_eq!(created.id, draft.id);
        assert_eq!(created.author, "Anonymous");
    }

    #[tokio::test]
    async fn test_list_all_posts() {
        let newer = model("newer", 1);
        let older = model("older", 10);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![newer.clone(), older.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let posts = repo.list_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, newer.id);
        assert_eq!(posts[1].id, older.id);
    }

    #[tokio::test]
    async fn test_replace_fields_updates_post() {
        let existing = model("Before", 5);
        let mut after = existing.clone();
        after.title = "After".to_owned();
        after.updated_at = Utc::now().into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()], vec![after]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let changes = PostChanges::new(Some("After".into()), None, None).unwrap();
        let updated = repo.replace_fields(existing.id, changes).await.unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.title, "After");
        assert!(updated.updated_at > Post::from(existing).updated_at);
    }

    #[tokio::test]
    async fn test_replace_fields_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo
            .replace_fields(Uuid::new_v4(), PostChanges::default())
            .await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_post() {
        let existing = model("Doomed", 3);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let deleted = repo.delete_by_id(existing.id).await.unwrap();

        assert_eq!(deleted.id, existing.id);
        assert_eq!(deleted.title, "Doomed");
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo.delete_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal("boom".to_owned()))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo.list_all().await;

        assert!(matches!(result, Err(RepoError::Query(msg)) if msg.contains("boom")));
    }
}
