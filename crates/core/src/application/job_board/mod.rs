// Job Board Service - CRUD use cases over the job post registry

use crate::domain::{JobPost, PostId};
use crate::error::{AppError, Result};
use crate::port::JobPostRepository;
use std::sync::Arc;
use tracing::{debug, warn};

/// Job Board Service
///
/// Turns the repository's "no match" results into `AppError::NotFound` so the
/// adapter layer can answer with a proper not-found response. A missing id never
/// changes the collection.
#[derive(Clone)]
pub struct JobBoardService {
    repo: Arc<dyn JobPostRepository>,
}

impl JobBoardService {
    pub fn new(repo: Arc<dyn JobPostRepository>) -> Self {
        Self { repo }
    }

    /// All posts in insertion order
    pub async fn list_all(&self) -> Result<Vec<JobPost>> {
        let posts = self.repo.list_all().await?;
        debug!(count = posts.len(), "Listed job posts");
        Ok(posts)
    }

    /// First post with the given id
    pub async fn get_by_id(&self, id: PostId) -> Result<JobPost> {
        match self.repo.find_by_id(id).await? {
            Some(post) => Ok(post),
            None => {
                warn!(post_id = id, "Job post lookup missed");
                Err(AppError::post_not_found(id))
            }
        }
    }

    /// Append a post; duplicate ids are accepted
    pub async fn add(&self, post: JobPost) -> Result<()> {
        self.repo.insert(&post).await?;
        debug!(post_id = post.post_id, "Added job post");
        Ok(())
    }

    /// Overwrite the first post matching `post.post_id` and return it
    pub async fn update(&self, post: JobPost) -> Result<JobPost> {
        let id = post.post_id;
        match self.repo.update(&post).await? {
            Some(updated) => {
                debug!(post_id = id, "Updated job post");
                Ok(updated)
            }
            None => {
                warn!(post_id = id, "Update skipped, no such job post");
                Err(AppError::post_not_found(id))
            }
        }
    }

    /// Remove the first post with the given id and return it
    pub async fn delete_by_id(&self, id: PostId) -> Result<JobPost> {
        match self.repo.delete_by_id(id).await? {
            Some(removed) => {
                debug!(post_id = id, "Deleted job post");
                Ok(removed)
            }
            None => {
                warn!(post_id = id, "Delete skipped, no such job post");
                Err(AppError::post_not_found(id))
            }
        }
    }
}
