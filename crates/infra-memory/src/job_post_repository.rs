// In-Memory JobPostRepository Implementation

use async_trait::async_trait;
use jobboard_core::domain::seed::default_posts;
use jobboard_core::domain::{JobPost, PostId};
use jobboard_core::error::Result;
use jobboard_core::port::JobPostRepository;
use tokio::sync::RwLock;

/// Ordered job post collection guarded by a read/write lock.
///
/// Readers share the lock; every mutation holds the write lock for the whole
/// operation so callers never observe a partial update.
#[derive(Debug, Default)]
pub struct InMemoryJobPostRepository {
    posts: RwLock<Vec<JobPost>>,
}

impl InMemoryJobPostRepository {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `posts` in the given order
    pub fn with_posts(posts: Vec<JobPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Registry holding the two startup postings
    pub fn seeded() -> Self {
        Self::with_posts(default_posts())
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl JobPostRepository for InMemoryJobPostRepository {
    async fn list_all(&self) -> Result<Vec<JobPost>> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<JobPost>> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.post_id == id).cloned())
    }

    async fn insert(&self, post: &JobPost) -> Result<()> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        tracing::trace!(post_id = post.post_id, total = posts.len(), "Inserted job post");
        Ok(())
    }

    async fn update(&self, post: &JobPost) -> Result<Option<JobPost>> {
        let mut posts = self.posts.write().await;
        let Some(existing) = posts.iter_mut().find(|p| p.post_id == post.post_id) else {
            return Ok(None);
        };
        existing.apply_update(post.clone());
        Ok(Some(existing.clone()))
    }

    async fn delete_by_id(&self, id: PostId) -> Result<Option<JobPost>> {
        let mut posts = self.posts.write().await;
        // Locate first, then remove: the scan never runs over a shrinking Vec
        let Some(index) = posts.iter().position(|p| p.post_id == id) else {
            return Ok(None);
        };
        Ok(Some(posts.remove(index)))
    }
}
