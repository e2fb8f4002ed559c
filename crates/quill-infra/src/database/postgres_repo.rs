//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use uuid::Uuid;

use quill_core::RepoError;
use quill_core::domain::{Post, PostChanges};
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> Result<post::Model, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new_post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %new_post.id, "Inserting post");

        let active_model: post::ActiveModel = new_post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace_fields(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %id, "Updating post");

        let mut active_model = self.find_model(id).await?.into_active_model();
        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(content) = changes.content {
            active_model.content = Set(content);
        }
        if let Some(author) = changes.author {
            active_model.author = Set(author);
        }
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %id, "Deleting post");

        let model = self.find_model(id).await?;
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        // Removed by a concurrent request between the lookup and the delete.
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(model.into())
    }
}
