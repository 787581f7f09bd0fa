// Domain Layer - Pure business logic and entities

pub mod job_post;
pub mod seed;

// Re-exports
pub use job_post::{JobPost, PostId};
