use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostChanges};
use crate::error::RepoError;

/// Record store for posts.
///
/// Every handler performs exactly one call on this trait, so implementations
/// must not retry or batch internally.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a freshly built post.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Every stored post, most recently created first.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Apply `changes` to the post with `id` and advance its update timestamp.
    ///
    /// Returns [`RepoError::NotFound`] when no post has that id.
    async fn replace_fields(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError>;

    /// Remove the post with `id`, returning its last stored state.
    ///
    /// Returns [`RepoError::NotFound`] when no post has that id.
    async fn delete_by_id(&self, id: Uuid) -> Result<Post, RepoError>;
}
