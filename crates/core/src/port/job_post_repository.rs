// Job Post Repository Port (Interface)

use crate::domain::{JobPost, PostId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for the ordered job post collection
///
/// Implementations keep insertion order and allow duplicate ids; every
/// lookup or mutation by id targets the first match.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPostRepository: Send + Sync {
    /// All posts in insertion order
    async fn list_all(&self) -> Result<Vec<JobPost>>;

    /// First post with the given id
    async fn find_by_id(&self, id: PostId) -> Result<Option<JobPost>>;

    /// Append a post (no id collision check)
    async fn insert(&self, post: &JobPost) -> Result<()>;

    /// Overwrite all fields but the id of the first post matching `post.post_id`.
    /// Returns the updated post, or `None` if nothing matched.
    async fn update(&self, post: &JobPost) -> Result<Option<JobPost>>;

    /// Remove the first post with the given id.
    /// Returns the removed post, or `None` if nothing matched.
    async fn delete_by_id(&self, id: PostId) -> Result<Option<JobPost>>;
}
